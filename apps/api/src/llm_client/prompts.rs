// Prompt constants. Each is sent as the first part of a generateContent call,
// followed by the resume text (and, for matching, the job description).

/// Structured field extraction. Reply must be a single JSON object.
pub const RESUME_FIELDS_PROMPT: &str = "\
    You are a resume parsing assistant. Extract the following information from the resume text below:\n\
    1. Name of the person\n\
    2. Email address\n\
    3. Phone/mobile number\n\
    4. List of skills (technical, professional, etc.)\n\n\
    VERY IMPORTANT: Return your answer ONLY as a valid JSON object with these exact keys: \
    name, email, mobile_number, skills (as an array). Try to limit single skill to at most 3 words. \
    Return at most 10 skills. \
    Format your response as valid, parseable JSON with no other text before or after. \
    Ensure all quotes are properly escaped.\n\n\
    Example of expected response format:\n\
    {\"name\": \"John Doe\", \"email\": \"john@example.com\", \"mobile_number\": \"1234567890\", \"skills\": [\"Python\", \"Machine Learning\"]}\n\n\
    RESUME TEXT:";

/// Location extraction for job search. Reply must be a single JSON object.
pub const LOCATION_PROMPT: &str = "\
    You are a resume parsing assistant. Find where the candidate is located, using the \
    contact or address section of the resume text below.\n\
    Return ONLY a valid JSON object with these exact keys: city, state, country, full_address. \
    Use null for anything the resume does not state. Do not guess.\n\n\
    Example of expected response format:\n\
    {\"city\": \"Austin\", \"state\": \"TX\", \"country\": \"United States\", \"full_address\": \"Austin, TX, USA\"}\n\n\
    RESUME TEXT:";

/// Free-text candidate summary.
pub const SUMMARY_PROMPT: &str = "\
    Act as a Applicant Tracking System(ATS) with deep knowledge and expertise in various job fields. \
    Analyse the entire Resume and give a brief summary of the candidate from the Resume. \
    Give the Summary in points within 100 to 150 words.";

/// Free-text resume vs job description evaluation.
pub const MATCH_PROMPT: &str = "\
    You are an skilled ATS (Applicant Tracking System) scanner with a deep understanding of \
    various job fields and ATS functionality, your task is to evaluate the resume against the \
    provided job description. First the output should come as Key skills missing and then last \
    final thoughts.";
