pub mod recording_launcher;
pub mod string_input;
