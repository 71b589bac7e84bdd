//! Coarse input scan.
//!
//! One cheap pass over the raw flattened text records which layout artifacts
//! are present at all. The normalizer uses the mask to skip passes that could
//! not match anything, and verbose runs report it so a misparse can be traced
//! back to the boilerplate the document actually carried.
//!
//! False positives are fine: a set bit only means the pass runs. A clear bit
//! only holds for the text that was scanned; a deletion by an earlier pass can
//! assemble a new marker, which the normalizer picks up by rescanning before
//! its next round.

bitflags::bitflags! {
    /// Layout artifacts detected in a document.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Signals: u32 {
        const BANNER     = 1 << 0;
        const FOOTER     = 1 << 1;
        const BULLETS    = 1 << 2;
        const DISCLAIMER = 1 << 3;
        const WIDE_GAPS  = 1 << 4;
        const LOCATIONS  = 1 << 5;
        const PODIUM     = 1 << 6;
        const AMOUNTS    = 1 << 7;
    }
}

pub(crate) const BANNER_MARKER: &str = "KERALA";
pub(crate) const FOOTER_MARKER: &str = "IT Support";
pub(crate) const DISCLAIMER_MARKER: &str = "The prize winner";

impl Signals {
    pub fn scan(input: &str) -> Self {
        let mut signals = Signals::empty();

        if input.contains(BANNER_MARKER) {
            signals |= Signals::BANNER;
        }
        if input.contains(FOOTER_MARKER) {
            signals |= Signals::FOOTER;
        }
        if input.contains(')') {
            signals |= Signals::BULLETS;
        }
        if input.contains(DISCLAIMER_MARKER) {
            signals |= Signals::DISCLAIMER;
        }
        if has_wide_gap(input) {
            signals |= Signals::WIDE_GAPS;
        }
        if input.contains('(') {
            signals |= Signals::LOCATIONS;
        }
        if input.contains("FOR ") && input.contains(" NUMBERS") {
            signals |= Signals::PODIUM;
        }
        if input.contains("Rs") {
            signals |= Signals::AMOUNTS;
        }

        signals
    }

    /// Names of the set flags, in bit order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

fn has_wide_gap(input: &str) -> bool {
    let mut run = 0usize;
    for c in input.chars() {
        if c.is_whitespace() {
            run += 1;
            if run >= 2 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
