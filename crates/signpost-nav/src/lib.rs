//! Navigation for Signpost sites.
//!
//! The crate covers three moments in a page's life:
//!
//! - **build time**: [`build::resolve_navigation`] turns the configured
//!   sections into a [`ResolvedNavigation`], extracting `auto` sidebars from
//!   markdown once per build;
//! - **render time**: [`NavigationView::build`] picks the active section for a
//!   request path and resolves its sidebar links;
//! - **client time**: [`SidebarNav`] tracks which sidebar group is expanded
//!   as the location path and fragment change.
pub mod base;
pub mod build;
pub mod html;
pub mod resolve;
pub mod state;
pub mod view;

pub use crate::{
  base::{strip_base_url, with_base},
  build::resolve_navigation,
  resolve::{
    ResolvedNavigation,
    ResolvedSection,
    Sidebar,
    SidebarKind,
    find_active_section,
    resolve_sidebar_paths,
  },
  state::{ItemState, LocationEvent, LocationProvider, RenderedItem, SidebarNav},
  view::{ActiveSidebar, NavigationView, ServiceItem},
};
