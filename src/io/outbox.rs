use crate::error::Result;
use crate::state::ContactSubmission;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append one submission as a JSON line.
pub fn append_submission(path: &Path, submission: &ContactSubmission) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut line = serde_json::to_string(submission)?;
    line.push('\n');

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::contact::ContactForm;

    #[test]
    fn test_appends_json_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out").join("contact.jsonl");
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            best_time: "Monday".into(),
            ..Default::default()
        };
        let submission = form.validate().expect("valid form");

        append_submission(&path, &submission).expect("first write");
        append_submission(&path, &submission).expect("second write");

        let contents = fs::read_to_string(&path).expect("read");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[0]).expect("json line");
        assert_eq!(value["bestTime"], "Monday");
        assert_eq!(value["message"], "Preferred time: Monday");
    }
}
