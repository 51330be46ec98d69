use crate::layout::global_context::AppGlobalContext;
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

use crate::domain::a101_catering_event::ui::list::CateringEventList;
use crate::domain::a102_shelf_life::ui::list::ShelfLifeList;
use crate::domain::a103_purchase_order::ui::list::PurchaseOrderList;
use crate::domain::a104_supplier::ui::list::SupplierScorecards;
use crate::domain::a105_price_tracker::ui::list::PriceAlertList;
use crate::domain::a106_payment_terminal::ui::list::TerminalSettings;
use crate::domain::a107_voice_command::ui::list::VoiceCommandPage;
use crate::domain::a108_sensor::ui::list::SensorDashboard;

/// Top-level pages of the back office, one per sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Catering,
    ShelfLife,
    PurchaseOrders,
    Suppliers,
    PriceTracker,
    Terminals,
    Voice,
    Sensors,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Catering,
        Page::ShelfLife,
        Page::PurchaseOrders,
        Page::Suppliers,
        Page::PriceTracker,
        Page::Terminals,
        Page::Voice,
        Page::Sensors,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Catering => "/catering",
            Page::ShelfLife => "/inventory/shelf-life",
            Page::PurchaseOrders => "/purchase-orders",
            Page::Suppliers => "/suppliers",
            Page::PriceTracker => "/price-tracker",
            Page::Terminals => "/payments/terminals",
            Page::Voice => "/voice",
            Page::Sensors => "/sensors",
        }
    }

    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.path() == path)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Catering => "Catering & Events",
            Page::ShelfLife => "Shelf Life",
            Page::PurchaseOrders => "Purchase Orders",
            Page::Suppliers => "Supplier Scorecards",
            Page::PriceTracker => "Price Tracker",
            Page::Terminals => "Payment Terminals",
            Page::Voice => "Voice Assistant",
            Page::Sensors => "Sensors",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Catering => "calendar",
            Page::ShelfLife => "inventory",
            Page::PurchaseOrders => "orders",
            Page::Suppliers => "suppliers",
            Page::PriceTracker => "trend",
            Page::Terminals => "card",
            Page::Voice => "mic",
            Page::Sensors => "thermometer",
        }
    }
}

#[component]
fn ActivePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    move || match ctx.active.get() {
        Page::Catering => view! { <CateringEventList /> }.into_any(),
        Page::ShelfLife => view! { <ShelfLifeList /> }.into_any(),
        Page::PurchaseOrders => view! { <PurchaseOrderList /> }.into_any(),
        Page::Suppliers => view! { <SupplierScorecards /> }.into_any(),
        Page::PriceTracker => view! { <PriceAlertList /> }.into_any(),
        Page::Terminals => view! { <TerminalSettings /> }.into_any(),
        Page::Voice => view! { <VoiceCommandPage /> }.into_any(),
        Page::Sensors => view! { <SensorDashboard /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            sidebar=|| view! { <Sidebar /> }.into_any()
            content=|| view! { <ActivePage /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
