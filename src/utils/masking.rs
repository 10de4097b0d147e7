/// Masks a pass key for log output: first two characters, then `***`
pub fn mask_pass_key(pass_key: &str) -> String {
    let visible: String = pass_key.chars().take(2).collect();
    format!("{}***", visible)
}
