//! 请求完成处理
//!
//! 消息通道总是写入；表单与结果表格只接受各自最新请求的结果，
//! 过期的结果被静默丢弃。

use customer_client::{ClientError, Customer};

use crate::backend::{Completion, Outcome};
use crate::model::{App, Ticket};

pub const SERVER_ERROR: &str = "Server error!";
pub const RETRIEVED: &str = "Success";
pub const DELETED: &str = "Customer has been Deleted!";

/// 服务端给出的提示原样显示，否则显示通用错误
fn reason(err: &ClientError) -> &str {
    err.service_message().unwrap_or(SERVER_ERROR)
}

fn found(count: usize) -> String {
    format!("Found {count} customer(s)")
}

pub fn apply(app: &mut App, completion: Completion) {
    let Completion { ticket, outcome } = completion;

    match outcome {
        Outcome::Created(Ok(customer)) => {
            app.messages
                .success(format!("Customer {} created", customer.id));
            populate_if_current(app, ticket, &customer);
        }
        Outcome::Created(Err(err)) => app.messages.error(reason(&err)),

        Outcome::Listed(Ok(customers)) => {
            app.messages.success(found(customers.len()));
            replace_results_if_current(app, ticket, customers);
        }
        Outcome::Searched(Ok(customers)) => {
            app.messages.success(found(customers.len()));
            // 首条命中同时回填表单；无命中时不影响其他请求对表单的占有
            if let Some(first) = customers.first() {
                if app.requests.claim_form_if_newer(ticket) {
                    app.form.populate(first);
                } else {
                    log::debug!("Discarding stale form update {ticket}");
                }
            }
            replace_results_if_current(app, ticket, customers);
        }
        Outcome::Listed(Err(err)) | Outcome::Searched(Err(err)) => {
            app.messages.error(reason(&err));
        }

        Outcome::Retrieved(Ok(customer)) => {
            app.messages.success(RETRIEVED);
            populate_if_current(app, ticket, &customer);
        }
        Outcome::Retrieved(Err(err)) => {
            app.messages.error(reason(&err));
            if app.requests.owns_form(ticket) {
                app.form.clear();
            }
        }

        Outcome::Updated { id, result } => {
            app.requests.release(&id);
            match result {
                Ok(customer) => {
                    app.messages.success(format!("Customer {id} updated"));
                    populate_if_current(app, ticket, &customer);
                }
                Err(err) => app.messages.error(reason(&err)),
            }
        }

        Outcome::Deleted { id, result } => {
            app.requests.release(&id);
            match result {
                Ok(()) => {
                    app.messages.success(DELETED);
                    if app.requests.owns_form(ticket) {
                        app.form.clear();
                        app.form.clear_identity();
                    }
                }
                Err(err) => {
                    log::info!("Delete of customer {id} failed: {err}");
                    app.messages.error(SERVER_ERROR);
                }
            }
        }

        Outcome::Details(Ok(customer)) => {
            app.messages.success(RETRIEVED);
            app.modal.show_details(customer);
        }
        Outcome::Details(Err(err)) => {
            app.messages.error(format!("Error: {}", reason(&err)));
        }

        Outcome::Transitioned { id, action, result } => {
            app.requests.release(&id);
            match result {
                Ok(()) => {
                    app.results.apply_transition(&id, action);
                    app.messages
                        .success(format!("Customer {id} {}d", action.verb()));
                }
                Err(err) => {
                    app.messages
                        .error(format!("{} failed: {}", action.display_name(), reason(&err)));
                }
            }
        }
    }
}

fn replace_results_if_current(app: &mut App, ticket: Ticket, customers: Vec<Customer>) {
    if app.requests.owns_results(ticket) {
        app.results.set_records(customers);
    } else {
        log::debug!("Discarding stale result set {ticket}");
    }
}

fn populate_if_current(app: &mut App, ticket: Ticket, customer: &Customer) {
    if app.requests.owns_form(ticket) {
        app.form.populate(customer);
    } else {
        log::debug!("Discarding stale form update {ticket}");
    }
}
