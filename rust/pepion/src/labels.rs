//! Display-label construction rules shared by every ion variant.

/// Radical charge marker.
pub(crate) const RADICAL: char = '\u{2022}';

/// Base sequential ion label, e.g. `b2[+]`.
pub(crate) fn base(series: char, ordinal: usize) -> String {
    format!("{series}{ordinal}[+]")
}

/// Radical-variant label, e.g. `[a2+H][\u{2022}+]`. `variant` is the
/// hydrogen-shift annotation (`-H`, `+H`, `+2H`).
pub(crate) fn radical(series: char, ordinal: usize, variant: &str) -> String {
    format!("[{series}{ordinal}{variant}][{RADICAL}+]")
}

/// Neutral-loss label for sequential ions, e.g. `[y3-H2O][+]`.
pub(crate) fn neutral_loss(series: char, ordinal: usize, loss: &str) -> String {
    format!("[{series}{ordinal}-{loss}][+]")
}

/// Base immonium label, e.g. `imm(P)`.
pub(crate) fn immonium(residue: char) -> String {
    format!("imm({residue})")
}

/// Neutral-loss label for immonium ions, e.g. `[imm(K)-NH3][+]`.
pub(crate) fn immonium_loss(residue: char, loss: &str) -> String {
    format!("[imm({residue})-{loss}][+]")
}

/// Charge annotation of precursor ions: the radical marker (if any), then
/// the charge state when above one, then `+`.
pub(crate) fn precursor_charge_symbol(charge: usize, is_radical: bool) -> String {
    let marker = if is_radical {
        RADICAL.to_string()
    } else {
        String::new()
    };
    let state = if charge > 1 {
        charge.to_string()
    } else {
        String::new()
    };
    format!("{marker}{state}+")
}

/// Rewrites a singly-charged label for a higher charge state by replacing
/// the first `+` token with `<charge>+`. Labels without a charge token
/// (immonium, which is never charge-expanded) pass through unchanged.
pub(crate) fn recharge(label: &str, charge: usize) -> String {
    match label.find('+') {
        Some(idx) => format!("{}{charge}+{}", &label[..idx], &label[idx + 1..]),
        None => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_labels() {
        assert_eq!(base('b', 2), "b2[+]");
        assert_eq!(radical('a', 3, "+H"), "[a3+H][\u{2022}+]");
        assert_eq!(radical('b', 1, "-H"), "[b1-H][\u{2022}+]");
        assert_eq!(neutral_loss('y', 4, "H2O"), "[y4-H2O][+]");
    }

    #[test]
    fn immonium_labels() {
        assert_eq!(immonium('W'), "imm(W)");
        assert_eq!(immonium_loss('K', "NH3"), "[imm(K)-NH3][+]");
    }

    #[test]
    fn precursor_charge_symbols() {
        assert_eq!(precursor_charge_symbol(1, false), "+");
        assert_eq!(precursor_charge_symbol(2, false), "2+");
        assert_eq!(precursor_charge_symbol(1, true), "\u{2022}+");
        assert_eq!(precursor_charge_symbol(3, true), "\u{2022}3+");
    }

    #[test]
    fn recharging_rewrites_the_first_charge_token() {
        assert_eq!(recharge("b2[+]", 2), "b2[2+]");
        assert_eq!(recharge("[y5-H2O][+]", 3), "[y5-H2O][3+]");
        // The radical marker stays in front of the charge state, matching
        // the precursor annotation order.
        assert_eq!(recharge("[b2-H][\u{2022}+]", 2), "[b2-H][\u{2022}2+]");
        assert_eq!(recharge("imm(P)", 2), "imm(P)");
    }
}
