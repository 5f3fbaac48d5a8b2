/// 비속어 치환 문자열
pub const CENSORED: &str = "****";

/// 비속어 필터 (설정으로 주입, 전역 상태 없음)
/// Profanity filter built from configuration
#[derive(Debug, Clone)]
pub struct ProfanityFilter {
    words: Vec<String>,
}

impl ProfanityFilter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// 공백 단위로 나눈 단어 중 목록에 있는 단어를 `****` 로 치환 (대소문자 무시)
    /// Words are split on single spaces; punctuation stays attached
    ///
    /// 4자 미만 단어는 글자 수만큼의 `*` 로 치환. 결과는 원문보다 길어지지 않음
    pub fn clean(&self, text: &str) -> String {
        text.split(' ')
            .map(|word| {
                if !self.words.iter().any(|bad| *bad == word.to_lowercase()) {
                    return word;
                }
                let length = word.chars().count();
                if length >= CENSORED.len() {
                    CENSORED
                } else {
                    &CENSORED[..length]
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> ProfanityFilter {
        ProfanityFilter::new(["kerfuffle", "sharbert", "fornax"])
    }

    #[test]
    fn test_replaces_case_insensitively() {
        assert_eq!(
            filter().clean("This is a Kerfuffle opinion I need to share with the world"),
            "This is a **** opinion I need to share with the world"
        );
        assert_eq!(filter().clean("FORNAX and sharbert"), "**** and ****");
    }

    #[test]
    fn test_punctuation_is_not_stripped() {
        assert_eq!(filter().clean("Sharbert! is fine"), "Sharbert! is fine");
    }

    #[test]
    fn test_spacing_preserved() {
        assert_eq!(filter().clean("a  fornax "), "a  **** ");
    }

    #[test]
    fn test_short_words_never_lengthen_text() {
        let filter = ProfanityFilter::new(["ass", "ok"]);
        assert_eq!(filter.clean("you ass, ass OK"), "you ass, *** **");

        let body = "ass ".repeat(35);
        let cleaned = filter.clean(&body);
        assert_eq!(cleaned, "*** ".repeat(35));
        assert_eq!(cleaned.chars().count(), body.chars().count());
    }
}
