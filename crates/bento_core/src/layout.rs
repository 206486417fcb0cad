//! Row layout of the bento grid.
//!
//! Rendering happens on the client; this is the shared rule deciding how many
//! cards go on each row.

use crate::types::Section;

pub const MIN_SECTIONS: usize = 3;
pub const MAX_SECTIONS: usize = 9;

/// Number of cards per row for a grid with `section_count` sections.
pub fn plan_rows(section_count: usize) -> Vec<usize> {
    match section_count.clamp(MIN_SECTIONS, MAX_SECTIONS) {
        3 => vec![3],
        4 => vec![2, 2],
        5 => vec![3, 2],
        6 => vec![3, 3],
        7 => vec![3, 2, 2],
        8 => vec![3, 3, 2],
        _ => vec![3, 3, 3],
    }
}

/// Groups sections into rows, dropping anything past [`MAX_SECTIONS`] and
/// padding with placeholders up to [`MIN_SECTIONS`].
pub fn arrange(sections: &[Section]) -> Vec<Vec<Section>> {
    let mut cards: Vec<Section> = sections.iter().take(MAX_SECTIONS).cloned().collect();
    while cards.len() < MIN_SECTIONS {
        cards.push(Section::placeholder());
    }

    let mut cards = cards.into_iter();
    plan_rows(sections.len())
        .into_iter()
        .map(|width| cards.by_ref().take(width).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SectionItem;

    fn sections(n: usize) -> Vec<Section> {
        (0..n)
            .map(|i| Section::new(format!("s{i}"), vec![SectionItem::new("l", "v")]))
            .collect()
    }

    #[test]
    fn test_plan_rows() {
        assert_eq!(plan_rows(0), vec![3]);
        assert_eq!(plan_rows(3), vec![3]);
        assert_eq!(plan_rows(4), vec![2, 2]);
        assert_eq!(plan_rows(5), vec![3, 2]);
        assert_eq!(plan_rows(6), vec![3, 3]);
        assert_eq!(plan_rows(7), vec![3, 2, 2]);
        assert_eq!(plan_rows(8), vec![3, 3, 2]);
        assert_eq!(plan_rows(9), vec![3, 3, 3]);
        assert_eq!(plan_rows(14), vec![3, 3, 3]);
    }

    #[test]
    fn test_arrange_pads_sparse_grids() {
        let rows = arrange(&sections(1));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[0][0].title, "s0");
        assert!(rows[0][1].is_placeholder());
        assert!(rows[0][2].is_placeholder());
    }

    #[test]
    fn test_arrange_caps_at_nine() {
        let rows = arrange(&sections(12));
        let total: usize = rows.iter().map(Vec::len).sum();
        assert_eq!(total, 9);
        assert_eq!(rows[2][2].title, "s8");
    }

    #[test]
    fn test_arrange_keeps_order() {
        let rows = arrange(&sections(7));
        let titles: Vec<Vec<&str>> = rows
            .iter()
            .map(|row| row.iter().map(|s| s.title.as_str()).collect())
            .collect();
        assert_eq!(
            titles,
            vec![vec!["s0", "s1", "s2"], vec!["s3", "s4"], vec!["s5", "s6"]]
        );
    }
}
