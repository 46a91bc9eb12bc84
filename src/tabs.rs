//! The tab bar and the page layout shared by the daily, monthly and profile tabs.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{HeadElement, PAGE_CONTAINER_STYLE, base},
};

/// One of the three tabs of the app. Exactly one tab is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Add and view today's expenses.
    #[default]
    Daily,
    /// View this month's expenses.
    Monthly,
    /// Log in and out.
    Profile,
}

impl Tab {
    /// Every tab, in the order they are shown.
    pub const ALL: [Tab; 3] = [Tab::Daily, Tab::Monthly, Tab::Profile];

    /// The page that shows this tab.
    pub fn endpoint(self) -> &'static str {
        match self {
            Tab::Daily => endpoints::DAILY_VIEW,
            Tab::Monthly => endpoints::MONTHLY_VIEW,
            Tab::Profile => endpoints::PROFILE_VIEW,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Daily => "Daily",
            Tab::Monthly => "Monthly",
            Tab::Profile => "Profile",
        }
    }

    /// The HTML element ID of the panel for this tab.
    pub fn panel_id(self) -> &'static str {
        match self {
            Tab::Daily => "tab-daily",
            Tab::Monthly => "tab-monthly",
            Tab::Profile => "tab-profile",
        }
    }
}

/// Template for a button in the tab bar.
struct TabButton {
    tab: Tab,
    is_current: bool,
}

impl TabButton {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "flex-1 px-3 py-2 rounded-xl text-center font-semibold \
            bg-pink-400 text-white shadow-sm dark:bg-pink-500"
        } else {
            "flex-1 px-3 py-2 rounded-xl text-center font-semibold \
            text-gray-600 hover:bg-pink-100 hover:text-pink-600 \
            dark:text-gray-300 dark:hover:bg-gray-800"
        };

        html!(
            a
                href=(self.tab.endpoint())
                class=(style)
                data-tab=(self.tab.panel_id())
                aria-current=[self.is_current.then_some("page")]
            {
                (self.tab.title())
            }
        )
    }
}

pub struct TabBar {
    buttons: Vec<TabButton>,
}

impl TabBar {
    /// Get the tab bar with `active` marked as the current tab.
    pub fn new(active: Tab) -> Self {
        let buttons = Tab::ALL
            .into_iter()
            .map(|tab| TabButton {
                tab,
                is_current: tab == active,
            })
            .collect();

        Self { buttons }
    }

    pub fn into_html(self) -> Markup {
        html!(
            nav class="flex w-full gap-2 p-2 mb-6 bg-white rounded-2xl shadow dark:bg-gray-800"
            {
                @for button in self.buttons {
                    (button.into_html())
                }
            }
        )
    }
}

/// Render a full page for `active` with `content` as the visible panel.
///
/// All three panels are present in the page, but only the active one has
/// content and the others are hidden.
pub fn tab_page(active: Tab, head_elements: &[HeadElement], content: Markup) -> Markup {
    let page = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="mb-4 text-3xl font-extrabold text-pink-500" { "SpendSpark ✨" }

            (TabBar::new(active).into_html())

            @for tab in Tab::ALL {
                @if tab == active {
                    section id=(tab.panel_id()) class="w-full" { (content) }
                } @else {
                    section id=(tab.panel_id()) class="w-full" hidden {}
                }
            }
        }
    );

    base(active.title(), head_elements, &page)
}
