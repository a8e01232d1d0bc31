use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A protein record as stored in the protein collection.
///
/// The store's `_id` is not part of the record and is dropped on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Protein {
    /// Stable unique identifier (e.g. a UniProt accession)
    #[schema(example = "P12345")]
    pub protein_id: String,

    #[schema(example = "Aspartate aminotransferase, mitochondrial")]
    pub name: String,

    /// Raw amino-acid residue string
    #[schema(example = "MALLHSARVLSGVASAFHPGLAAAASARASSWWAHVEMGPPDPILGVTEAYKRDTNSKK")]
    pub sequence: String,

    /// Residue count. Expected to match `sequence`, not enforced.
    #[schema(example = 430)]
    pub length: i64,

    #[schema(example = "Homo sapiens")]
    pub organism: String,

    #[schema(example = "Catalyzes the transamination of aspartate and glutamate")]
    pub function: String,

    /// Reviews in stored order. Missing or `null` in the store reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reviews: Vec<Review>,
}

/// A single review attached to a protein.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    #[schema(example = "jdoe")]
    pub reviewer: String,

    #[schema(example = "Well characterised, good reference structure")]
    pub comment: String,

    /// Expected 1-5, not validated
    #[schema(example = 5)]
    pub rating: i64,
}

/// The part of a stored protein that ranking needs: its id and review ratings.
///
/// Read through a projection so ranking never loads sequences or comments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProteinRatings {
    pub protein_id: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub reviews: Vec<ReviewRating>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReviewRating {
    pub rating: i64,
}

impl From<&Protein> for ProteinRatings {
    fn from(protein: &Protein) -> Self {
        Self {
            protein_id: protein.protein_id.clone(),
            reviews: protein
                .reviews
                .iter()
                .map(|r| ReviewRating { rating: r.rating })
                .collect(),
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc, oid::ObjectId};

    fn stored(reviews: Option<bson::Bson>) -> bson::Document {
        let mut doc = doc! {
            "_id": ObjectId::new(),
            "protein_id": "P12345",
            "name": "Aspartate aminotransferase",
            "sequence": "MALLHS",
            "length": 6_i32,
            "organism": "Homo sapiens",
            "function": "Transamination",
        };
        if let Some(reviews) = reviews {
            doc.insert("reviews", reviews);
        }
        doc
    }

    #[test]
    fn test_decode_ignores_store_id() {
        let protein: Protein = bson::from_document(stored(Some(bson::Bson::Array(vec![])))).unwrap();
        assert_eq!(protein.protein_id, "P12345");
        assert_eq!(protein.length, 6);

        let json = serde_json::to_value(&protein).unwrap();
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_missing_reviews_decode_as_empty() {
        let protein: Protein = bson::from_document(stored(None)).unwrap();
        assert!(protein.reviews.is_empty());
    }

    #[test]
    fn test_null_reviews_decode_as_empty() {
        let protein: Protein = bson::from_document(stored(Some(bson::Bson::Null))).unwrap();
        assert!(protein.reviews.is_empty());
    }

    #[test]
    fn test_reviews_keep_stored_order_and_int32_ratings() {
        let reviews = bson::bson!([
            { "reviewer": "a", "comment": "first", "rating": 4_i32 },
            { "reviewer": "b", "comment": "second", "rating": 2_i64 },
        ]);
        let protein: Protein = bson::from_document(stored(Some(reviews))).unwrap();

        let reviewers: Vec<_> = protein.reviews.iter().map(|r| r.reviewer.as_str()).collect();
        assert_eq!(reviewers, ["a", "b"]);
        assert_eq!(protein.reviews[0].rating, 4);
    }

    #[test]
    fn test_serialized_shape() {
        let protein: Protein = bson::from_document(stored(None)).unwrap();
        let json = serde_json::to_value(&protein).unwrap();

        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            ["function", "length", "name", "organism", "protein_id", "reviews", "sequence"]
        );
        assert_eq!(json["reviews"], serde_json::json!([]));
    }

    #[test]
    fn test_wrongly_typed_length_fails_to_decode() {
        let mut doc = stored(None);
        doc.insert("length", "abc");

        assert!(bson::from_document::<Protein>(doc).is_err());
    }

    #[test]
    fn test_missing_required_field_fails_to_decode() {
        let mut doc = stored(None);
        doc.remove("name");

        let err = bson::from_document::<Protein>(doc).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_ratings_projection_decodes() {
        let projected = doc! {
            "protein_id": "P12345",
            "reviews": [{ "rating": 4_i32 }, { "rating": 2_i64 }],
        };
        let ratings: ProteinRatings = bson::from_document(projected).unwrap();

        assert_eq!(ratings.protein_id, "P12345");
        assert_eq!(ratings.reviews, [ReviewRating { rating: 4 }, ReviewRating { rating: 2 }]);

        let unreviewed: ProteinRatings =
            bson::from_document(doc! { "protein_id": "P2", "reviews": bson::Bson::Null }).unwrap();
        assert!(unreviewed.reviews.is_empty());
    }
}
