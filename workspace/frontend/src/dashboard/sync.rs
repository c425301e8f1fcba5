//! Ordering of in-flight loads.
//!
//! Every load takes a ticket from its channel before the request goes out.
//! When the response arrives it is applied only if no newer ticket of the
//! same channel has been applied meanwhile.

use common::{Goal, Note, Task};

use crate::api_client::{ApiResult, DashboardApi};
use crate::components::{self, ListView};
use crate::layout::RecordKind;

use super::DashboardState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Tasks,
    Notes,
    Goals,
    Stats,
}

impl Channel {
    fn index(self) -> usize {
        match self {
            Channel::Tasks => 0,
            Channel::Notes => 1,
            Channel::Goals => 2,
            Channel::Stats => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub channel: Channel,
    pub seq: u64,
}

#[derive(Debug, Default)]
pub struct SyncTracker {
    issued: [u64; 4],
    applied: [u64; 4],
}

impl SyncTracker {
    pub fn issue(&mut self, channel: Channel) -> Ticket {
        let slot = &mut self.issued[channel.index()];
        *slot += 1;
        Ticket { channel, seq: *slot }
    }

    /// Marks `ticket` applied if it is newer than the last applied one.
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        let slot = &mut self.applied[ticket.channel.index()];
        if ticket.seq <= *slot {
            return false;
        }
        *slot = ticket.seq;
        true
    }
}

/// A record kind the controller caches and renders.
pub(crate) trait Cached: Clone + Sized {
    const KIND: RecordKind;
    const CHANNEL: Channel;

    async fn fetch<A: DashboardApi>(api: &A) -> ApiResult<Vec<Self>>;

    fn cache(state: &mut DashboardState) -> &mut Vec<Self>;

    fn render(records: &[Self], date_format: &str) -> ListView;
}

impl Cached for Task {
    const KIND: RecordKind = RecordKind::Task;
    const CHANNEL: Channel = Channel::Tasks;

    async fn fetch<A: DashboardApi>(api: &A) -> ApiResult<Vec<Self>> {
        api.list_tasks().await
    }

    fn cache(state: &mut DashboardState) -> &mut Vec<Self> {
        &mut state.tasks
    }

    fn render(records: &[Self], date_format: &str) -> ListView {
        components::tasks::render(records, date_format)
    }
}

impl Cached for Note {
    const KIND: RecordKind = RecordKind::Note;
    const CHANNEL: Channel = Channel::Notes;

    async fn fetch<A: DashboardApi>(api: &A) -> ApiResult<Vec<Self>> {
        api.list_notes().await
    }

    fn cache(state: &mut DashboardState) -> &mut Vec<Self> {
        &mut state.notes
    }

    fn render(records: &[Self], date_format: &str) -> ListView {
        components::notes::render(records, date_format)
    }
}

impl Cached for Goal {
    const KIND: RecordKind = RecordKind::Goal;
    const CHANNEL: Channel = Channel::Goals;

    async fn fetch<A: DashboardApi>(api: &A) -> ApiResult<Vec<Self>> {
        api.list_goals().await
    }

    fn cache(state: &mut DashboardState) -> &mut Vec<Self> {
        &mut state.goals
    }

    fn render(records: &[Self], date_format: &str) -> ListView {
        components::goals::render(records, date_format)
    }
}
