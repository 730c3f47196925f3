//! Read-only table of notifications with the enabled channels listed.

use leptos::prelude::*;

use crate::net::types::{Notification, NotificationKind};
use crate::util::datetime::humanize_timestamp;

/// Notifications table. The server already filters rows to the enabled
/// channels; `enabled_kinds` is display metadata, not a client-side filter.
#[component]
pub fn NotificationsTable(
    notifications: Vec<Notification>,
    enabled_kinds: Vec<NotificationKind>,
    is_loading: bool,
) -> impl IntoView {
    let container_class = if is_loading {
        "notifications-table notifications-table--refreshing"
    } else {
        "notifications-table"
    };

    view! {
        <div class=container_class>
            <div class="notifications-table__types">
                <span>"Showing Types:"</span>
                {enabled_kinds
                    .into_iter()
                    .map(|kind| view! { <span class="badge">{kind.label()}</span> })
                    .collect::<Vec<_>>()}
            </div>

            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Type"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {notifications
                        .into_iter()
                        .map(|n| {
                            view! {
                                <tr>
                                    <td>
                                        <div class="notifications-table__title">{n.title}</div>
                                        <div class="notifications-table__description">
                                            {n.description}
                                        </div>
                                    </td>
                                    <td>{n.kind.label()}</td>
                                    <td>{humanize_timestamp(&n.created_at)}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
