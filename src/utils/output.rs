/// Renders found words the way the solver prints them: every word followed by a comma
pub fn render_words(words: &[String]) -> String {
    words.iter().map(|w| format!("{},", w)).collect()
}
