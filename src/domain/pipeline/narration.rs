//! Spoken-style narration script.

use crate::domain::Deadline;

const GREETING: &str = "Hi. Let me help you understand this.";
const CLOSING: &str = "Take it one step at a time. You've got this.";

pub fn compose_audio_script(simplified_text: &str, deadline: &Deadline) -> String {
    let mut script = format!("{GREETING} {simplified_text} ");
    if deadline.is_specified() {
        script.push_str(&format!(
            "Remember, this is due {}. ",
            deadline.as_str().to_lowercase()
        ));
    }
    script.push_str(CLOSING);
    script
}
