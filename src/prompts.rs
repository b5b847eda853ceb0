//! Prompt templates for the drafting API.
//!
//! Each request carries a system message (generation rules, selected by
//! language) and a user message (the staged diff). Prompts are parameterized
//! by the commit type the user picked.

use crate::models::Language;

/// Generation rules sent as the system message.
pub fn system_prompt(commit_type: &str, language: Language) -> String {
    match language {
        Language::English => format!(
            r#"You are a Git commit message generator that follows conventional commits specification.
Generate a concise, clear commit message based on the git diff provided.
The commit type will be '{commit_type}'.
Follow these guidelines:
1. Start with ONE brief subject line (max 72 chars), this is the commit message
2. Include a separate description with two sections:
   - What: Describe the changes made
   - Why: Explain the reason for the changes
3. Focus on the purpose and impact of the changes
4. Format the response as:
   {commit_type}: commit message
   Description:
     What:
     Why:
5. Keep the message professional and technical"#
        ),
        Language::Indonesian => format!(
            r#"Kamu adalah generator pesan commit Git yang mengikuti spesifikasi conventional commits.
Hasilkan pesan commit yang jelas dan ringkas berdasarkan git diff yang diberikan.
Tipe commit akan berupa '{commit_type}'.
Ikuti pedoman berikut:
1. Mulai dengan SATU baris judul singkat (maksimum 72 karakter), ini adalah pesan commit
2. Sertakan deskripsi terpisah dengan dua bagian:
   - Perubahan: Jelaskan perubahan yang dilakukan
   - Alasan Perubahan: Jelaskan alasan perubahan
3. Fokus pada tujuan dan dampak perubahan
4. Format respons sebagai:
   {commit_type}: pesan commit
   Deskripsi:
     Perubahan:
     Alasan Perubahan:
5. Jaga agar pesan tetap profesional dan teknis"#
        ),
    }
}

/// The staged diff plus instructions, sent as the user message.
pub fn user_prompt(diff: &str, commit_type: &str, language: Language) -> String {
    match language {
        Language::English => format!(
            "Here's the git diff for my staged changes:\n\n{diff}\n\n\
             Generate a conventional commit message with type '{commit_type}'. \
             Clearly separate the commit message (one line) and description."
        ),
        Language::Indonesian => format!(
            "Ini adalah git diff untuk perubahan yang di-staged:\n\n{diff}\n\n\
             Hasilkan pesan commit konvensional dengan tipe '{commit_type}'. \
             Pisahkan dengan jelas antara pesan commit (satu baris) dan deskripsi (format markdown)."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_embeds_commit_type() {
        let prompt = system_prompt("feat", Language::English);
        assert!(prompt.contains("'feat'"));
        assert!(prompt.contains("feat: commit message"));
    }

    #[test]
    fn test_system_prompt_indonesian() {
        let prompt = system_prompt("fix", Language::Indonesian);
        assert!(prompt.contains("'fix'"));
        assert!(prompt.contains("Alasan Perubahan"));
    }

    #[test]
    fn test_user_prompt_carries_diff() {
        let prompt = user_prompt("+added line", "docs", Language::English);
        assert!(prompt.contains("+added line"));
        assert!(prompt.contains("'docs'"));
    }
}
