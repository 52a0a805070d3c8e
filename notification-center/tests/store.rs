use notification_center::{
    IdGenerator, NotificationCenter, NotificationId, NotificationRequest, NotificationStatus,
    SequentialIds,
};
use std::collections::HashSet;

fn center() -> NotificationCenter {
    NotificationCenter::with_ids(SequentialIds::default())
}

fn titles(center: &NotificationCenter) -> Vec<&str> {
    center.items().iter().map(|n| n.title.as_str()).collect()
}

#[test]
fn show_then_remove_single() {
    let mut center = NotificationCenter::new();
    let id = center.show("Salvo");
    assert_eq!(center.len(), 1);
    assert_eq!(center.items()[0].title, "Salvo");
    assert!(!id.as_str().is_empty());
    assert_eq!(center.items()[0].id, id);

    assert!(center.remove(&id));
    assert!(center.is_empty());
}

#[test]
fn show_preserves_call_order() {
    let mut center = center();
    let a = center.show("A");
    let b = center.show("B");
    assert_eq!(titles(&center), vec!["A", "B"]);

    center.remove(&a);
    assert_eq!(titles(&center), vec!["B"]);
    assert_eq!(center.items()[0].id, b);
}

#[test]
fn ids_are_distinct() {
    let mut center = NotificationCenter::new();
    let ids: HashSet<NotificationId> = (0..200).map(|i| center.show(format!("n{i}").as_str())).collect();
    assert_eq!(ids.len(), 200);
    assert_eq!(center.len(), 200);
}

#[test]
fn remove_keeps_relative_order_of_others() {
    let mut center = center();
    let ids: Vec<_> = ["A", "B", "C", "D"].into_iter().map(|t| center.show(t)).collect();
    center.remove(&ids[2]);
    assert_eq!(titles(&center), vec!["A", "B", "D"]);
    center.remove(&ids[0]);
    assert_eq!(titles(&center), vec!["B", "D"]);
}

#[test]
fn remove_unknown_is_noop() {
    let mut center = center();
    center.show("A");
    let before = center.snapshot();
    let revision = center.revision();

    assert!(!center.remove(&NotificationId::from("missing")));
    assert_eq!(center.snapshot(), before);
    assert_eq!(center.revision(), revision);
}

#[test]
fn remove_twice_same_as_once() {
    let mut center = center();
    let a = center.show("A");
    center.show("B");

    assert!(center.remove(&a));
    let after_first = center.snapshot();
    assert!(!center.remove(&a));
    assert_eq!(center.snapshot(), after_first);
}

#[test]
fn request_fields_are_kept() {
    let mut center = center();
    let id = center.show(
        NotificationRequest::new("Erro ao salvar")
            .description("Tente novamente")
            .status(NotificationStatus::Error),
    );
    let item = center.get(&id).expect("item");
    assert_eq!(item.description.as_deref(), Some("Tente novamente"));
    assert_eq!(item.status, Some(NotificationStatus::Error));
}

#[test]
fn status_shortcuts() {
    let mut center = center();
    let ok = center.success("Viagem criada", None);
    let err = center.error("Falha", Some("Servidor indisponível"));
    let info = center.info("Dica", None);

    assert_eq!(center.get(&ok).unwrap().status, Some(NotificationStatus::Success));
    assert_eq!(center.get(&err).unwrap().status, Some(NotificationStatus::Error));
    assert_eq!(
        center.get(&err).unwrap().description.as_deref(),
        Some("Servidor indisponível")
    );
    assert_eq!(center.get(&info).unwrap().status, Some(NotificationStatus::Info));
}

#[test]
fn empty_title_is_accepted() {
    let mut center = center();
    let id = center.show("");
    assert!(center.contains(&id));
}

#[test]
fn revision_tracks_changes() {
    let mut center = center();
    assert_eq!(center.revision(), 0);
    let a = center.show("A");
    assert_eq!(center.revision(), 1);
    center.remove(&a);
    assert_eq!(center.revision(), 2);
    center.clear();
    assert_eq!(center.revision(), 2);
    center.show("B");
    center.clear();
    assert!(center.is_empty());
    assert_eq!(center.revision(), 4);
}

#[test]
fn sequential_ids_are_prefixed() {
    let mut center = center();
    assert_eq!(center.show("A").as_str(), "toast-1");
    assert_eq!(center.show("B").as_str(), "toast-2");
}

struct Stuck;

impl IdGenerator for Stuck {
    fn next_id(&mut self) -> NotificationId {
        NotificationId::from("same")
    }
}

#[test]
fn colliding_generator_still_yields_unique_ids() {
    let mut center = NotificationCenter::with_ids(Stuck);
    let a = center.show("A");
    let b = center.show("B");
    assert_eq!(a.as_str(), "same");
    assert_ne!(a, b);
    assert_eq!(center.len(), 2);
}

#[test]
fn notification_serializes_without_empty_fields() {
    let mut center = center();
    center.show("Salvo");
    center.show(NotificationRequest::success("Ok").description("feito"));
    let json = serde_json::to_value(center.items()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "id": "toast-1", "title": "Salvo" },
            { "id": "toast-2", "title": "Ok", "description": "feito", "status": "success" }
        ])
    );
}

#[test]
fn status_parses_case_insensitive() {
    assert_eq!("Error".parse::<NotificationStatus>(), Ok(NotificationStatus::Error));
    assert_eq!(" info ".parse::<NotificationStatus>(), Ok(NotificationStatus::Info));
    assert!("warning".parse::<NotificationStatus>().is_err());
}
