use std::process::{Command, Stdio};

/// Fire-and-forget text-to-speech collaborator. The engine never reads a
/// result back; dictation challenges only hand over the word to speak.
pub trait Speaker {
    fn speak(&mut self, text: &str);
}

/// Spawns an external TTS program (espeak, say, ...) with the text as its
/// single argument. Failures are ignored; audio is best effort.
pub struct CommandSpeaker {
    program: String,
}

impl CommandSpeaker {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&mut self, text: &str) {
        let _ = Command::new(&self.program)
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
    }
}

/// Used when speech is disabled or unavailable.
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn speak(&mut self, _text: &str) {}
}

#[cfg(test)]
pub struct RecordingSpeaker {
    pub spoken: Vec<String>,
}

#[cfg(test)]
impl Speaker for RecordingSpeaker {
    fn speak(&mut self, text: &str) {
        self.spoken.push(text.to_string());
    }
}
