/// Outcome of a kernel-level moving average call.
///
/// `Skipped` means a parameter guard rejected the call and the output buffer
/// was left exactly as the caller provided it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MaStatus {
    Computed,
    Skipped,
}

impl MaStatus {
    #[inline(always)]
    pub const fn is_computed(self) -> bool {
        matches!(self, MaStatus::Computed)
    }

    #[inline(always)]
    pub const fn is_skipped(self) -> bool {
        matches!(self, MaStatus::Skipped)
    }
}
