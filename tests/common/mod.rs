// Album directory fixtures shared by the integration tests
#![allow(dead_code)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use trixtag::{FieldSet, Prompter, TagField};

pub const SHOW_DIR: &str = "gd73-06-22.mtx.seamons.ht12.92375.flac16";

pub const SHOW_HEADER: [&str; 4] = [
    "Grateful Dead",
    "P.N.E. Coliseum",
    "Vancouver, BC, Canada",
    "June 22, 1973",
];

/// Create an album directory with a metadata file, a cover and the named audio files
pub fn album_dir(parent: &Path, name: &str, body: &[&str], audio_files: &[&str]) -> PathBuf {
    let dir = parent.join(name);
    fs::create_dir_all(&dir).unwrap();

    let mut text = SHOW_HEADER.join("\n");
    for line in body {
        text.push('\n');
        text.push_str(line);
    }
    text.push('\n');
    fs::write(dir.join("gd73-06-22.mtx.seamons.txt"), text).unwrap();
    fs::write(dir.join("gd730622_front1.jpg"), b"\xFF\xD8\xFF\xE0 not really a jpeg").unwrap();

    for file in audio_files {
        fs::write(dir.join(file), b"fLaC").unwrap();
    }
    dir
}

/// Prompter that answers from a list and remembers the questions
#[derive(Default)]
pub struct ScriptedPrompter {
    pub answers: Vec<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn answering(answer: &str) -> Self {
        Self {
            answers: vec![answer.to_string()],
            questions: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        self.questions.push(message.to_string());
        if self.answers.is_empty() {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no more answers"))
        } else {
            Ok(self.answers.remove(0))
        }
    }
}

/// Values of a field set keyed by Vorbis name, for readable assertions
pub fn field(fields: &FieldSet, field: TagField) -> String {
    fields.get(field).unwrap_or_default().to_string()
}
