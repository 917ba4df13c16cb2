// Everything derived from the uploaded PDF itself: raw text, LLM-extracted
// contact fields and skills, writing tips, candidate level, and archival.

pub mod archive;
pub mod fields;
pub mod level;
pub mod pdf;
pub mod tips;
