pub mod multipart;

/// A config tuned for in-process tests: loopback addresses, short timeouts
/// and a bucket/domain that differ from production defaults so assertions
/// can tell them apart.
pub trait TestDefault {
    fn test_default() -> Self;
}
