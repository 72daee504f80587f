//! Reading time estimation

/// Reading speed used for estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimate how long a body takes to read, as "N min read".
///
/// Words are whitespace-delimited tokens. Minutes round up, so any
/// non-empty body reads in at least one minute and an empty one in zero.
pub fn estimate_reading_time(body: &str) -> String {
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE);
    format!("{} min read", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_exact_minute() {
        assert_eq!(estimate_reading_time(&words(200)), "1 min read");
    }

    #[test]
    fn test_rounds_up() {
        assert_eq!(estimate_reading_time(&words(401)), "3 min read");
        assert_eq!(estimate_reading_time(&words(201)), "2 min read");
    }

    #[test]
    fn test_short_body_is_one_minute() {
        assert_eq!(estimate_reading_time("Hello"), "1 min read");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(estimate_reading_time(""), "0 min read");
        assert_eq!(estimate_reading_time("  \n\t "), "0 min read");
    }

    #[test]
    fn test_monotonic() {
        let mut last = 0;
        for n in (0..1000).step_by(37) {
            let label = estimate_reading_time(&words(n));
            let minutes: usize = label.split(' ').next().unwrap().parse().unwrap();
            assert!(minutes >= last);
            last = minutes;
        }
    }

    #[test]
    fn test_mixed_whitespace() {
        let body = "one\ttwo\nthree   four\r\nfive";
        assert_eq!(body.split_whitespace().count(), 5);
        assert_eq!(estimate_reading_time(body), "1 min read");
    }
}
