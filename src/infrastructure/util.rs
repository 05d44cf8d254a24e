// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// `slug`-crate slugification restricted to Latin text: accented Latin letters are
/// folded to ASCII, characters from other scripts become separators. Combining
/// diacritics are dropped so decomposed input folds the same as composed input.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let latin: String = input
            .chars()
            .filter(|c| !is_combining_mark(*c))
            .map(|c| if is_latin(c) { c } else { ' ' })
            .collect();
        slugify(latin)
    }
}

fn is_latin(c: char) -> bool {
    c.is_ascii()
        || matches!(
            c,
            '\u{00C0}'..='\u{00D6}'
                | '\u{00D8}'..='\u{00F6}'
                | '\u{00F8}'..='\u{024F}'
                | '\u{1E00}'..='\u{1EFF}'
        )
}

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}
