//! Property tests comparing the forest against a relabelling model.
//!
//! The model keeps an explicit subset label per element and relabels a whole
//! subset on every merge, which is slow but obviously correct.

use proptest::prelude::*;

use super::DisjointSetForest;
use crate::test_utils::suite_proptest_config;

struct LabelModel {
    labels: Vec<usize>,
}

impl LabelModel {
    fn new(len: usize) -> Self {
        Self {
            labels: (0..len).collect(),
        }
    }

    fn union(&mut self, left: usize, right: usize) -> bool {
        let from = self.labels[right];
        let to = self.labels[left];
        if from == to {
            return false;
        }
        for label in &mut self.labels {
            if *label == from {
                *label = to;
            }
        }
        true
    }

    fn size_of(&self, element: usize) -> usize {
        let label = self.labels[element];
        self.labels.iter().filter(|&&other| other == label).count()
    }

    fn subset_count(&self) -> usize {
        let mut labels = self.labels.clone();
        labels.sort_unstable();
        labels.dedup();
        labels.len()
    }
}

fn universe_and_unions() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1_usize..48).prop_flat_map(|len| {
        (
            Just(len),
            prop::collection::vec((0..len, 0..len), 0..96),
        )
    })
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn forest_matches_relabelling_model((len, unions) in universe_and_unions()) {
        let mut forest = DisjointSetForest::new(0..len).expect("distinct elements");
        let mut model = LabelModel::new(len);

        for (left, right) in unions {
            let before = forest.subset_count();
            let merged = forest.union(&left, &right).expect("known elements");
            prop_assert_eq!(merged, model.union(left, right));
            prop_assert_eq!(
                forest.subset_count(),
                if merged { before - 1 } else { before }
            );
            prop_assert_eq!(forest.representative(&left), forest.representative(&right));
        }

        prop_assert_eq!(forest.subset_count(), model.subset_count());
        prop_assert_eq!(forest.subsets().count(), model.subset_count());
        prop_assert_eq!(forest.total_size(), len);
        for element in 0..len {
            prop_assert_eq!(forest.size_of(&element), Ok(model.size_of(element)));
            let members = forest.members(&element).map(|members| members.len());
            prop_assert_eq!(members, Ok(model.size_of(element)));
            for other in 0..len {
                let same = model.labels[element] == model.labels[other];
                prop_assert_eq!(forest.same_subset(&element, &other), Ok(same));
            }
        }
    }

    #[test]
    fn heights_stay_logarithmic((len, unions) in universe_and_unions()) {
        let mut forest = DisjointSetForest::new(0..len).expect("distinct elements");
        for (left, right) in unions {
            forest.union(&left, &right).expect("known elements");
        }

        for root in forest.subsets() {
            let size = forest.size_of(root).expect("root is a known element");
            let height = u32::from(forest.height[*root]);
            prop_assert!(1_usize << height <= size, "height {height} exceeds log2({size})");
        }
    }
}
