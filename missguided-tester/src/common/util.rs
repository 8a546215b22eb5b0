pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse comma-separated seeds, skipping anything that is not a `u64`.
pub fn parse_seeds(s: &str) -> Vec<u64> {
    split_csv(s)
        .into_iter()
        .filter_map(|token| match token.parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                log::warn!("ignoring invalid seed {token:?}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" alpha, ,beta,  gamma ");
        assert_eq!(parts, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn parse_seeds_skips_garbage() {
        assert_eq!(parse_seeds("1, two, 3,,-4"), vec![1, 3]);
    }
}
