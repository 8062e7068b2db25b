//! 在途请求跟踪
//!
//! 每个发出的请求领取一张单调递增的票据。
//! - 表单只接受最近一次“写表单”请求的结果；搜索只有在命中时才参与竞争
//! - 结果表格只接受最近一次列表/搜索请求的结果
//! - 同一客户同时最多一个修改类请求（更新、删除、激活、停用）

use std::collections::HashSet;
use std::fmt;

use customer_client::CustomerId;

/// 请求票据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    issued: u64,
    in_flight: HashSet<CustomerId>,
    latest_form: Option<Ticket>,
    latest_results: Option<Ticket>,
}

impl RequestTracker {
    /// 领取下一张票据
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// 为 `id` 加锁；已有在途修改请求时返回 `false`
    pub fn try_lock(&mut self, id: &CustomerId) -> bool {
        self.in_flight.insert(id.clone())
    }

    pub fn release(&mut self, id: &CustomerId) {
        self.in_flight.remove(id);
    }

    #[cfg(test)]
    pub fn is_locked(&self, id: &CustomerId) -> bool {
        self.in_flight.contains(id)
    }

    pub fn claim_form(&mut self, ticket: Ticket) {
        self.latest_form = Some(ticket);
    }

    /// 在完成时占有表单：之后没有更新的写表单请求发出时才成功
    pub fn claim_form_if_newer(&mut self, ticket: Ticket) -> bool {
        if self.latest_form.is_some_and(|latest| latest > ticket) {
            return false;
        }
        self.latest_form = Some(ticket);
        true
    }

    pub fn owns_form(&self, ticket: Ticket) -> bool {
        self.latest_form == Some(ticket)
    }

    pub fn claim_results(&mut self, ticket: Ticket) {
        self.latest_results = Some(ticket);
    }

    pub fn owns_results(&self, ticket: Ticket) -> bool {
        self.latest_results == Some(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase() {
        let mut tracker = RequestTracker::default();
        let a = tracker.issue();
        let b = tracker.issue();
        assert!(b > a);
    }

    #[test]
    fn lock_is_per_identity() {
        let mut tracker = RequestTracker::default();
        let one = CustomerId::parse("1").unwrap();
        let two = CustomerId::parse("2").unwrap();

        assert!(tracker.try_lock(&one));
        assert!(!tracker.try_lock(&one));
        assert!(tracker.try_lock(&two));

        tracker.release(&one);
        assert!(!tracker.is_locked(&one));
        assert!(tracker.try_lock(&one));
    }

    #[test]
    fn only_latest_claim_owns_the_form() {
        let mut tracker = RequestTracker::default();
        let older = tracker.issue();
        tracker.claim_form(older);
        let newer = tracker.issue();
        tracker.claim_form(newer);

        assert!(!tracker.owns_form(older));
        assert!(tracker.owns_form(newer));
        assert!(!tracker.owns_results(newer));
    }

    #[test]
    fn late_claim_only_succeeds_without_newer_writer() {
        let mut tracker = RequestTracker::default();
        let retrieve = tracker.issue();
        tracker.claim_form(retrieve);
        let search = tracker.issue();

        assert!(tracker.owns_form(retrieve));
        assert!(tracker.claim_form_if_newer(search));
        assert!(!tracker.owns_form(retrieve));

        let newer = tracker.issue();
        tracker.claim_form(newer);
        assert!(!tracker.claim_form_if_newer(search));
        assert!(tracker.owns_form(newer));
    }
}
