// Resume / job description matching.
// file_reader loads documents, normalizer builds word sets, service wires the two together.
// Handlers and the HTML page sit on top; nothing below handlers knows about HTTP.

pub mod file_reader;
pub mod handlers;
pub mod normalizer;
pub mod page;
pub mod service;
