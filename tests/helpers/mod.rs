pub mod pdf_fixtures;
