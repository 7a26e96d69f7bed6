//! End-to-end designer flows driven through gesture events.

use formsmith_designer::{DesignerSession, DragOrigin, DropTarget, Half};
use formsmith_fields::{Attributes, FieldKind, Registry};

#[test]
fn palette_drops_build_the_form_top_to_bottom() {
    let mut session = DesignerSession::new();

    session.pick_up(DragOrigin::Palette(FieldKind::Text));
    session.hover(Some(DropTarget::Canvas));
    let first = session.release().unwrap().unwrap();

    assert_eq!(session.elements().len(), 1);
    assert_eq!(session.elements()[0].kind, FieldKind::Text);
    assert_eq!(
        session.elements()[0].attributes,
        Registry::lookup(FieldKind::Text).default_attributes()
    );

    session.pick_up(DragOrigin::Palette(FieldKind::Text));
    session.hover(Some(DropTarget::instance(first.clone(), Half::Bottom)));
    let second = session.release().unwrap().unwrap();

    assert_eq!(session.elements().len(), 2);
    assert_eq!(session.elements()[0].id, first);
    assert_eq!(session.elements()[1].id, second);
}

#[test]
fn dragging_placed_instances_reorders() {
    let mut session = DesignerSession::new();
    let title = session.add(FieldKind::Title);
    let name = session.add(FieldKind::Text);
    let agree = session.add(FieldKind::Checkbox);

    // Checkbox up above the text field.
    session.pick_up(DragOrigin::Instance(agree.clone()));
    session.hover(Some(DropTarget::instance(name.clone(), Half::Top)));
    session.release().unwrap();

    let order: Vec<_> = session.elements().iter().map(|e| e.id.clone()).collect();
    assert_eq!(order, vec![title.clone(), agree.clone(), name.clone()]);

    // Title down below the text field.
    session.pick_up(DragOrigin::Instance(title.clone()));
    session.hover(Some(DropTarget::instance(name.clone(), Half::Bottom)));
    session.release().unwrap();

    let order: Vec<_> = session.elements().iter().map(|e| e.id.clone()).collect();
    assert_eq!(order, vec![agree, name, title]);
}

#[test]
fn edited_form_survives_save_and_reload() {
    let mut session = DesignerSession::new();
    let id = session.add(FieldKind::TextArea);
    let attrs = Registry::lookup(FieldKind::TextArea)
        .default_attributes()
        .with("label", "Comments")
        .with("rows", 6);
    session.update_properties(&id, attrs).unwrap();
    session.add(FieldKind::Separator);

    let saved = session.content().unwrap();
    let reopened = DesignerSession::load(&saved).unwrap();

    assert_eq!(reopened.elements(), session.elements());
    assert_eq!(reopened.elements()[0].attributes.get_u64("rows"), Some(6));
}

#[test]
fn trimmed_properties_survive_save_and_reload() {
    let mut session = DesignerSession::new();
    let id = session.add(FieldKind::Text);
    let attrs = Attributes::new()
        .with("label", "Name")
        .with("required", true)
        .with("placeholder", "");
    session.update_properties(&id, attrs.clone()).unwrap();

    let reopened = DesignerSession::load(&session.content().unwrap()).unwrap();

    assert_eq!(reopened.elements(), session.elements());
    assert_eq!(reopened.elements()[0].attributes, attrs);
}

#[test]
fn drop_outside_any_zone_changes_nothing() {
    let mut session = DesignerSession::new();
    session.add(FieldKind::Text);
    let before = session.state().clone();

    session.pick_up(DragOrigin::Palette(FieldKind::Number));
    session.hover(None);
    assert_eq!(session.release().unwrap(), None);
    assert_eq!(session.state(), &before);
}
