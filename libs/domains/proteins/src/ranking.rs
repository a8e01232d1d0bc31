//! Top-N ranking by average review rating.

use std::cmp::Ordering;

use crate::models::{Protein, ProteinRatings};

/// Something that carries review ratings and can therefore be ranked.
pub trait Rated {
    fn ratings(&self) -> impl Iterator<Item = i64> + '_;
}

impl Rated for Protein {
    fn ratings(&self) -> impl Iterator<Item = i64> + '_ {
        self.reviews.iter().map(|r| r.rating)
    }
}

impl Rated for ProteinRatings {
    fn ratings(&self) -> impl Iterator<Item = i64> + '_ {
        self.reviews.iter().map(|r| r.rating)
    }
}

/// An item paired with its mean rating. Never leaves this module.
struct Ranked<T> {
    average_rating: Option<f64>,
    item: T,
}

impl<T: Rated> From<T> for Ranked<T> {
    fn from(item: T) -> Self {
        Self {
            average_rating: average_rating(&item),
            item,
        }
    }
}

/// Mean of the ratings, `None` without reviews. Summed in `f64` since
/// ratings are unvalidated and may be anywhere in the `i64` range.
fn average_rating<T: Rated>(item: &T) -> Option<f64> {
    let (count, total) = item
        .ratings()
        .fold((0_usize, 0_f64), |(count, total), rating| (count + 1, total + rating as f64));
    (count > 0).then(|| total / count as f64)
}

/// Descending by average; items without reviews sort after all rated ones.
fn by_average_desc<T>(a: &Ranked<T>, b: &Ranked<T>) -> Ordering {
    match (a.average_rating, b.average_rating) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order `items` by average rating, highest first, and keep at most `limit`.
///
/// Ties keep the input order.
pub fn rank_top_rated<T: Rated>(items: Vec<T>, limit: usize) -> Vec<T> {
    let mut ranked: Vec<Ranked<T>> = items.into_iter().map(Ranked::from).collect();
    ranked.sort_by(by_average_desc);
    ranked.truncate(limit);
    ranked.into_iter().map(|r| r.item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Review;

    fn protein(id: &str, ratings: &[i64]) -> Protein {
        Protein {
            protein_id: id.to_string(),
            name: format!("{} name", id),
            sequence: "MK".to_string(),
            length: 2,
            organism: "Homo sapiens".to_string(),
            function: "test".to_string(),
            reviews: ratings
                .iter()
                .map(|&rating| Review {
                    reviewer: "r".to_string(),
                    comment: "c".to_string(),
                    rating,
                })
                .collect(),
        }
    }

    fn ids(proteins: &[Protein]) -> Vec<&str> {
        proteins.iter().map(|p| p.protein_id.as_str()).collect()
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(average_rating(&protein("P", &[])), None);
        assert_eq!(average_rating(&protein("P", &[3, 4])), Some(3.5));
    }

    #[test]
    fn test_extreme_ratings_do_not_overflow() {
        let input = vec![
            protein("LOW", &[i64::MIN, i64::MIN]),
            protein("B", &[1]),
            protein("A", &[i64::MAX, 1]),
        ];

        let ranked = rank_top_rated(input, 3);

        assert_eq!(ids(&ranked), ["A", "B", "LOW"]);
    }

    #[test]
    fn test_projected_ratings_rank_like_full_records() {
        let full = vec![protein("P1", &[5]), protein("P2", &[]), protein("P3", &[3, 5])];
        let projected: Vec<ProteinRatings> = full.iter().map(ProteinRatings::from).collect();

        let ranked_full = rank_top_rated(full, 3);
        let ranked_projected = rank_top_rated(projected, 3);

        let projected_ids: Vec<&str> =
            ranked_projected.iter().map(|r| r.protein_id.as_str()).collect();
        assert_eq!(ids(&ranked_full), projected_ids);
    }

    #[test]
    fn test_unreviewed_rank_last() {
        let input = vec![protein("P1", &[5]), protein("P2", &[]), protein("P3", &[3, 5])];

        let ranked = rank_top_rated(input, 2);

        assert_eq!(ids(&ranked), ["P1", "P3"]);
    }

    #[test]
    fn test_unreviewed_included_when_limit_allows() {
        let input = vec![protein("P2", &[]), protein("P1", &[1])];

        let ranked = rank_top_rated(input, 10);

        assert_eq!(ids(&ranked), ["P1", "P2"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = vec![
            protein("A", &[4]),
            protein("B", &[3, 5]),
            protein("C", &[]),
            protein("D", &[5]),
            protein("E", &[]),
            protein("F", &[2, 6]),
        ];

        let ranked = rank_top_rated(input, 10);

        assert_eq!(ids(&ranked), ["D", "A", "B", "F", "C", "E"]);
    }

    #[test]
    fn test_limit_truncates() {
        let input = (1..=5).map(|i| protein(&format!("P{}", i), &[i])).collect();

        let ranked = rank_top_rated(input, 3);

        assert_eq!(ids(&ranked), ["P5", "P4", "P3"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_top_rated(Vec::<Protein>::new(), 5).is_empty());
    }

    #[test]
    fn test_records_are_returned_unchanged() {
        let original = protein("P1", &[2, 4]);

        let ranked = rank_top_rated(vec![original.clone()], 1);

        assert_eq!(ranked, vec![original]);
    }
}
