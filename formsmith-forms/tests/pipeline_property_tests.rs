//! Property tests for the submission pipeline and the store counters.

use formsmith_fields::{FieldId, FieldInstance, FieldKind, Registry};
use formsmith_forms::{
    pipeline, FormStore, MemoryFormStore, NewForm, OwnerScope, SubmissionOutcome,
    SubmissionValues,
};
use proptest::prelude::*;

const TEXT_KINDS: [FieldKind; 3] = [FieldKind::Text, FieldKind::Number, FieldKind::TextArea];

fn form(layout: &[(usize, bool)]) -> Vec<FieldInstance> {
    layout.iter()
        .enumerate()
        .map(|(i, &(kind, required))| {
            let kind = TEXT_KINDS[kind % TEXT_KINDS.len()];
            let mut field = Registry::construct(kind, FieldId::from(format!("f{i}")));
            field.attributes.set("required", required);
            field
        })
        .collect()
}

proptest! {
    /// The error set is exactly the required fields left empty, in form order.
    #[test]
    fn error_set_is_every_empty_required_field(
        layout in prop::collection::vec((0usize..3, any::<bool>()), 0..12),
        filled in prop::collection::vec(any::<bool>(), 12),
    ) {
        let fields = form(&layout);
        let values: SubmissionValues = fields
            .iter()
            .zip(&filled)
            .filter(|&(_, &f)| f)
            .map(|(field, _)| (field.id.as_str().to_string(), "x"))
            .collect();

        let expected: Vec<FieldId> = fields
            .iter()
            .zip(&filled)
            .filter(|&(field, &f)| field.attributes.required() && !f)
            .map(|(field, _)| field.id.clone())
            .collect();

        let invalid = pipeline::validate(&fields, &values);
        prop_assert_eq!(invalid.ids(), expected.as_slice());

        let outcome = pipeline::prepare(&fields, &values).unwrap();
        prop_assert_eq!(outcome.is_ready(), expected.is_empty());
    }

    /// Each accepted submission bumps the counter by one; visits only move on reads.
    #[test]
    fn counters_track_calls(reads in 0u64..6, submits in 0u64..6) {
        let (visits, submissions) = tokio_test::block_on(async {
            let store = MemoryFormStore::new();
            let owner = OwnerScope::user("owner");
            let id = store.create_form(&owner, NewForm::new("Survey", "")).await.unwrap();
            store.publish_form(&owner, id).await.unwrap();
            let token = store.get_form(&owner, id).await.unwrap().unwrap().share_token;

            for _ in 0..reads {
                store.get_form_content_by_share_token(&token).await.unwrap();
            }
            for _ in 0..submits {
                store.submit_form(&token, "{}").await.unwrap();
            }
            let form = store.get_form(&owner, id).await.unwrap().unwrap();
            (form.visits, form.submissions)
        });
        prop_assert_eq!(visits, reads);
        prop_assert_eq!(submissions, submits);
    }
}

#[test]
fn ready_values_round_trip_as_json() {
    let fields = form(&[(0, true), (1, false)]);
    let values = SubmissionValues::new().with("f0", "hi").with("f1", "5");
    let SubmissionOutcome::Ready(json) = pipeline::prepare(&fields, &values).unwrap() else {
        panic!("expected ready");
    };
    assert_eq!(SubmissionValues::from_json(&json).unwrap(), values);
}
