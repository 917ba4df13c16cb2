// Resume analysis: the upload pipeline, its stored rows, follow-up AI
// reports and job search on a stored analysis, and the admin views.

pub mod admin;
pub mod handlers;
pub mod pipeline;
pub mod repository;
