use leptos::prelude::*;

use super::css;
use crate::components::router::NavLink;
use crate::models::NavItem;

/// Ordered navigation list, rendered in the order given.
#[component]
pub fn SidebarNav(items: &'static [NavItem]) -> impl IntoView {
    view! {
        <nav class=css::sidebarNav>
            <ol>
                {items
                    .iter()
                    .map(|item| view! { <SidebarNavItem item=*item /> })
                    .collect_view()}
            </ol>
        </nav>
    }
}

/// Single navigation entry. Highlighting is decided by [`NavLink`].
#[component]
pub fn SidebarNavItem(item: NavItem) -> impl IntoView {
    view! {
        <li class=css::sidebarNavItem>
            <NavLink href=item.href active_class=css::sidebarActiveLink>
                <img src=item.icon alt="" />
                <span>{item.name}</span>
            </NavLink>
        </li>
    }
}
