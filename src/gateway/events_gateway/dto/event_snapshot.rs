use uuid::Uuid;

///
/// Read-only view of an event as reported by the events service.
///
#[derive(Clone, Debug)]
pub struct EventSnapshot {
    pub id: Uuid,
    pub status: String,
    pub sections: Vec<EventSection>,
}

#[derive(Clone, Debug)]
pub struct EventSection {
    pub id: Uuid,
    pub name: String,
    pub capacity: u32,
}
