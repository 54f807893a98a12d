//! Unit tests with stub collaborators (no network required)
