use itertools::Itertools;
use std::fmt::Display;

/// Render row-major `cells` as text: tab between elements, newline between rows.
pub fn render_rows<T: Display>(cells: &[T], cols: usize) -> String {
    if cols == 0 {
        return String::new();
    }
    cells
        .chunks(cols)
        .map(|row| row.iter().join("\t"))
        .join("\n")
}

/// Shape of a nested list, or `None` when the rows are ragged.
pub fn list_shape<T>(lines: &[Vec<T>]) -> Option<(usize, usize)> {
    let cols = lines.first().map(|l| l.len()).unwrap_or(0);
    if lines.iter().any(|l| l.len() != cols) {
        return None;
    }
    Some((lines.len(), cols))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rows() {
        assert_eq!(render_rows(&[1, 2, 3, 4, 5, 6], 3), "1\t2\t3\n4\t5\t6");
        assert_eq!(render_rows(&[1.5], 1), "1.5");
        assert_eq!(render_rows::<i32>(&[], 0), "");
    }

    #[test]
    fn test_list_shape() {
        assert_eq!(list_shape(&[vec![1, 2], vec![3, 4], vec![5, 6]]), Some((3, 2)));
        assert_eq!(list_shape::<i32>(&[]), Some((0, 0)));
        assert_eq!(list_shape(&[vec![1, 2], vec![3]]), None);
    }
}
