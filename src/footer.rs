//! Generation of the skills footer appended to every target file.

use crate::constants::SKILLS_DEST_DIR;

/// Builds the "Available Skills & Tools" footer for the given skill filenames.
///
/// Returns an empty string when there are no skills, so rule sets without a
/// `skills/` directory get the core content verbatim.
pub fn skills_footer(skills: &[String]) -> String {
    if skills.is_empty() {
        return String::new();
    }

    let mut footer = String::from("\n\n---\n\n## Available Skills & Tools\n");
    footer.push_str(&format!(
        "You have access to specialized skills in the `{}/` directory.\n",
        SKILLS_DEST_DIR
    ));
    footer.push_str("Read the corresponding file if the user asks for these tasks:\n\n");

    for skill in skills {
        footer.push_str(&format!(
            "- **{}**: Read `{}/{}`\n",
            skill, SKILLS_DEST_DIR, skill
        ));
    }

    footer
}
