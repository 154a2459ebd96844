/// Upcoming world event timers, all fields optional as the tracker omits unknown events
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EventTimers {
    pub boss_name: Option<String>,
    pub boss_time: Option<i64>,
    pub helltide_time: Option<i64>,
    pub legion_time: Option<i64>,
}
