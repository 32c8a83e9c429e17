//! Prime number helpers for sizing hash tables.

/// Returns `true` if `n` is prime.
pub fn is_prime(n: usize) -> bool {
    if n <= 1 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns the smallest prime greater than or equal to `n`, or `None` if
/// no such prime fits in a `usize`.
pub fn next_prime(n: usize) -> Option<usize> {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate = candidate.checked_add(1)?;
    }
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, false)]
    #[test_case(1, false)]
    #[test_case(2, true)]
    #[test_case(4, false)]
    #[test_case(25, false)]
    #[test_case(113, true)]
    #[test_case(7919, true)]
    fn test_is_prime(n: usize, expected: bool) {
        assert_eq!(is_prime(n), expected);
    }

    #[test_case(0, Some(2))]
    #[test_case(1, Some(2))]
    #[test_case(2, Some(2))]
    #[test_case(100, Some(101))]
    #[test_case(113, Some(113))]
    #[test_case(114, Some(127))]
    #[test_case(usize::MAX, None ; "at the top of the range")]
    fn test_next_prime(n: usize, expected: Option<usize>) {
        assert_eq!(next_prime(n), expected);
    }
}
