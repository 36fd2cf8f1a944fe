pub fn parse_positive_usize(value: &str) -> Result<usize, String> {
    let parsed = value
        .parse::<usize>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

pub fn parse_positive_u64(value: &str) -> Result<u64, String> {
    let parsed = value
        .parse::<u64>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::{parse_positive_u64, parse_positive_usize};

    #[test]
    fn unit_positive_parsers_reject_zero_and_garbage() {
        assert_eq!(parse_positive_usize("3"), Ok(3));
        assert_eq!(parse_positive_u64("30000"), Ok(30_000));
        assert!(parse_positive_usize("0").is_err());
        assert!(parse_positive_u64("-1").is_err());
        assert!(parse_positive_u64("soon").is_err());
    }
}
