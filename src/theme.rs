use std::collections::BTreeMap;

/// One color set applied to everything carrying a category accent: card
/// badges, category cards, page headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
}

/// Fixed palette; categories with more books claim earlier entries. Looping
/// round-robin when there are more categories than colors.
pub const PALETTE: &[CategoryColors] = &[
    CategoryColors { bg: "#eff6ff", text: "#1d4ed8", border: "#bfdbfe", accent: "#2563eb" },
    CategoryColors { bg: "#f0fdf4", text: "#15803d", border: "#bbf7d0", accent: "#16a34a" },
    CategoryColors { bg: "#faf5ff", text: "#7e22ce", border: "#e9d5ff", accent: "#9333ea" },
    CategoryColors { bg: "#eef2ff", text: "#4338ca", border: "#c7d2fe", accent: "#4f46e5" },
    CategoryColors { bg: "#fef2f2", text: "#b91c1c", border: "#fecaca", accent: "#dc2626" },
    CategoryColors { bg: "#fdf2f8", text: "#be185d", border: "#fbcfe8", accent: "#db2777" },
    CategoryColors { bg: "#fff7ed", text: "#c2410c", border: "#fed7aa", accent: "#ea580c" },
    CategoryColors { bg: "#fffbeb", text: "#b45309", border: "#fde68a", accent: "#d97706" },
    CategoryColors { bg: "#fafaf9", text: "#44403c", border: "#e7e5e4", accent: "#57534e" },
    CategoryColors { bg: "#f8fafc", text: "#334155", border: "#e2e8f0", accent: "#475569" },
    CategoryColors { bg: "#f0fdfa", text: "#0f766e", border: "#99f6e4", accent: "#0d9488" },
    CategoryColors { bg: "#ecfdf5", text: "#047857", border: "#a7f3d0", accent: "#059669" },
    CategoryColors { bg: "#ecfeff", text: "#0e7490", border: "#a5f3fc", accent: "#0891b2" },
    CategoryColors { bg: "#fdf4ff", text: "#a21caf", border: "#f5d0fe", accent: "#c026d3" },
    CategoryColors { bg: "#fff1f2", text: "#be123c", border: "#fecdd3", accent: "#e11d48" },
    CategoryColors { bg: "#f5f3ff", text: "#6d28d9", border: "#ddd6fe", accent: "#7c3aed" },
    CategoryColors { bg: "#f7fee7", text: "#4d7c0f", border: "#d9f99d", accent: "#65a30d" },
    CategoryColors { bg: "#f0f9ff", text: "#0369a1", border: "#bae6fd", accent: "#0284c7" },
];

/// Gray set for anything the assignment missed.
pub const DEFAULT_COLORS: CategoryColors = CategoryColors {
    bg: "#f9fafb",
    text: "#374151",
    border: "#e5e7eb",
    accent: "#4b5563",
};

/// Assigns palette entries by descending book count, category name breaking
/// ties so repeat builds agree. Returned as a plain map and threaded into
/// rendering; no process-wide state.
pub fn assign_colors(
    category_counts: &BTreeMap<String, usize>,
) -> BTreeMap<String, CategoryColors> {
    let mut ordered: Vec<(&String, &usize)> = category_counts.iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    ordered
        .into_iter()
        .enumerate()
        .map(|(idx, (name, _))| (name.clone(), PALETTE[idx % PALETTE.len()]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, usize)]) -> BTreeMap<String, usize> {
        pairs.iter().map(|(n, c)| (n.to_string(), *c)).collect()
    }

    #[test]
    fn busiest_category_gets_first_palette_entry() {
        let assigned = assign_colors(&counts(&[("Fiction", 12), ("Magazines", 3)]));
        assert_eq!(assigned["Fiction"], PALETTE[0]);
        assert_eq!(assigned["Magazines"], PALETTE[1]);
    }

    #[test]
    fn ties_break_by_name_for_determinism() {
        let assigned = assign_colors(&counts(&[("Travel", 4), ("Cooking", 4)]));
        assert_eq!(assigned["Cooking"], PALETTE[0]);
        assert_eq!(assigned["Travel"], PALETTE[1]);
    }

    #[test]
    fn palette_wraps_when_exhausted() {
        let many: Vec<(String, usize)> = (0..PALETTE.len() + 2)
            .map(|i| (format!("cat{i:02}"), PALETTE.len() + 2 - i))
            .collect();
        let map: BTreeMap<String, usize> = many.into_iter().collect();
        let assigned = assign_colors(&map);
        assert_eq!(assigned["cat00"], PALETTE[0]);
        assert_eq!(assigned[&format!("cat{:02}", PALETTE.len())], PALETTE[0]);
    }
}
