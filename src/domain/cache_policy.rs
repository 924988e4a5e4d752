// Cache policy - CDN caching directives attached to dashboard responses

/// Shared-cache lifetime for a dashboard response.
///
/// Applied to live and fallback responses alike, so a cached body may be
/// sample data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub s_maxage: u32,
    pub stale_while_revalidate: u32,
}

impl CachePolicy {
    pub const fn new(s_maxage: u32, stale_while_revalidate: u32) -> Self {
        Self {
            s_maxage,
            stale_while_revalidate,
        }
    }

    /// Render as a `Cache-Control` header value
    pub fn header_value(&self) -> String {
        format!(
            "s-maxage={}, stale-while-revalidate={}",
            self.s_maxage, self.stale_while_revalidate
        )
    }
}
