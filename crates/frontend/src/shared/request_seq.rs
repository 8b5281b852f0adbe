/// Numbers outgoing requests so that only the latest one may write its result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Number of a newly issued request. Earlier numbers become stale.
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// True while no newer request has been issued after `seq`
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_request_is_current() {
        let mut seq = RequestSeq::default();
        let first = seq.next();
        assert!(seq.is_current(first));

        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_nothing_issued_yet() {
        let seq = RequestSeq::default();
        assert!(!seq.is_current(1));
    }
}
