//! Owner-drawn navigation bar: logo, page links, and the theme toggle
//! pill. Clicks become `Message`s on the app channel.

use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    draw,
    enums::{Align, Color, Event, Font},
    prelude::*,
    widget::Widget,
};

use crate::app::controllers::router::Route;
use crate::app::domain::theme::{Palette, ThemeName};
use crate::app::messages::Message;
use crate::ui::theme::to_fltk;

pub const NAV_BAR_HEIGHT: i32 = 40;

const H_PADDING: i32 = 16;
const LOGO_W: i32 = 56;
const LINK_W: i32 = 56;
const BACK_W: i32 = 120;
const TOGGLE_W: i32 = 46;
const TOGGLE_H: i32 = 24;
const TOGGLE_GAP: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitZone {
    Home,
    Blog,
    Back,
    Toggle,
}

struct NavState {
    logo: String,
    theme: ThemeName,
    route: Route,
    hover: Option<HitZone>,
    sender: Sender<Message>,
}

pub struct NavBar {
    pub widget: Widget,
    state: Rc<RefCell<NavState>>,
}

impl NavBar {
    pub fn new(x: i32, y: i32, w: i32, sender: Sender<Message>) -> Self {
        let state = Rc::new(RefCell::new(NavState {
            logo: String::new(),
            theme: ThemeName::Dark,
            route: Route::Home,
            hover: None,
            sender,
        }));

        let mut widget = Widget::new(x, y, w, NAV_BAR_HEIGHT, None);

        let draw_state = state.clone();
        widget.draw(move |wid| {
            let st = draw_state.borrow();
            draw_nav_bar(wid, &st);
        });

        let handle_state = state.clone();
        widget.handle(move |wid, event| handle_nav_bar(wid, event, &handle_state));

        Self { widget, state }
    }

    pub fn set_logo(&mut self, logo: &str) {
        self.state.borrow_mut().logo = logo.to_uppercase();
        self.widget.redraw();
    }

    pub fn set_theme(&mut self, theme: ThemeName) {
        self.state.borrow_mut().theme = theme;
        self.widget.redraw();
    }

    pub fn set_route(&mut self, route: &Route) {
        self.state.borrow_mut().route = route.clone();
        self.widget.redraw();
    }
}

/// Zones laid out left to right; the back link only exists on a post
/// page and the toggle pill is pinned to the right edge.
fn hit_test(width: i32, show_back: bool, mx: i32, my: i32) -> Option<HitZone> {
    if my < 0 || my >= NAV_BAR_HEIGHT {
        return None;
    }

    let home_x = H_PADDING + LOGO_W;
    let blog_x = home_x + LINK_W;
    let back_x = blog_x + LINK_W;
    let toggle_x = width - H_PADDING - TOGGLE_W;

    if mx >= toggle_x && mx < toggle_x + TOGGLE_W {
        return Some(HitZone::Toggle);
    }
    if mx >= home_x && mx < home_x + LINK_W {
        return Some(HitZone::Home);
    }
    if mx >= blog_x && mx < blog_x + LINK_W {
        return Some(HitZone::Blog);
    }
    if show_back && mx >= back_x && mx < back_x + BACK_W {
        return Some(HitZone::Back);
    }
    None
}

fn link_color(palette: &Palette, active: bool, hovered: bool) -> Color {
    if active {
        to_fltk(palette.link_hover)
    } else if hovered {
        to_fltk(palette.link)
    } else {
        to_fltk(palette.link_tertiary)
    }
}

fn draw_rounded_rect(x: i32, y: i32, w: i32, h: i32, r: i32, color: Color) {
    draw::set_draw_color(color);
    draw::draw_rectf(x + r, y, w - 2 * r, h);
    draw::draw_rectf(x, y + r, r, h - 2 * r);
    draw::draw_rectf(x + w - r, y + r, r, h - 2 * r);
    draw::draw_pie(x, y, 2 * r, 2 * r, 90.0, 180.0);
    draw::draw_pie(x + w - 2 * r, y, 2 * r, 2 * r, 0.0, 90.0);
    draw::draw_pie(x, y + h - 2 * r, 2 * r, 2 * r, 180.0, 270.0);
    draw::draw_pie(x + w - 2 * r, y + h - 2 * r, 2 * r, 2 * r, 270.0, 360.0);
}

fn draw_nav_bar(wid: &Widget, st: &NavState) {
    let wx = wid.x();
    let wy = wid.y();
    let ww = wid.w();
    let wh = wid.h();
    let palette = st.theme.palette();

    // Background and bottom border
    draw::set_draw_color(to_fltk(palette.navigation_background));
    draw::draw_rectf(wx, wy, ww, wh);
    draw::set_draw_color(to_fltk(palette.border));
    draw::draw_rectf(wx, wy + wh - 1, ww, 1);

    // Logo
    draw::set_draw_color(to_fltk(palette.text));
    draw::set_font(Font::HelveticaBold, 13);
    draw::draw_text2(&st.logo, wx + H_PADDING, wy, LOGO_W, wh, Align::Left | Align::Inside);

    // Page links
    draw::set_font(Font::Helvetica, 12);
    let home_x = wx + H_PADDING + LOGO_W;
    let on_home = st.route == Route::Home;
    draw::set_draw_color(link_color(palette, on_home, st.hover == Some(HitZone::Home)));
    draw::draw_text2("Home", home_x, wy, LINK_W, wh, Align::Left | Align::Inside);

    let blog_x = home_x + LINK_W;
    let on_blog = st.route == Route::Blog;
    draw::set_draw_color(link_color(palette, on_blog, st.hover == Some(HitZone::Blog)));
    draw::draw_text2("Blog", blog_x, wy, LINK_W, wh, Align::Left | Align::Inside);

    if matches!(st.route, Route::Post(_)) {
        let back_x = blog_x + LINK_W;
        draw::set_draw_color(link_color(palette, false, st.hover == Some(HitZone::Back)));
        draw::draw_text2(
            "\u{2190} Back to blog",
            back_x,
            wy,
            BACK_W,
            wh,
            Align::Left | Align::Inside,
        );
    }

    // Theme toggle pill; the circle sits right in light mode
    let toggle_x = wx + ww - H_PADDING - TOGGLE_W;
    let toggle_y = wy + (wh - TOGGLE_H) / 2;
    let radius = TOGGLE_H / 2;
    draw_rounded_rect(toggle_x, toggle_y, TOGGLE_W, TOGGLE_H, radius, to_fltk(palette.toggle_slider));

    let circle_d = TOGGLE_H - 2 * TOGGLE_GAP;
    let circle_x = match st.theme {
        ThemeName::Light => toggle_x + TOGGLE_W - TOGGLE_GAP - circle_d,
        ThemeName::Dark => toggle_x + TOGGLE_GAP,
    };
    draw::set_draw_color(to_fltk(palette.toggle_circle));
    draw::draw_pie(circle_x, toggle_y + TOGGLE_GAP, circle_d, circle_d, 0.0, 360.0);

    draw::set_draw_color(to_fltk(palette.text));
    draw::set_font(Font::Helvetica, 11);
    match st.theme {
        ThemeName::Light => {
            // Sun on the free (left) side
            draw::draw_text2("\u{2600}", toggle_x, toggle_y, radius + TOGGLE_GAP + 4, TOGGLE_H, Align::Center);
        }
        ThemeName::Dark => {
            // Moon on the free (right) side
            draw::draw_text2(
                "\u{263e}",
                toggle_x + TOGGLE_W - radius - TOGGLE_GAP - 4,
                toggle_y,
                radius + TOGGLE_GAP + 4,
                TOGGLE_H,
                Align::Center,
            );
        }
    }
}

fn handle_nav_bar(wid: &mut Widget, event: Event, state: &Rc<RefCell<NavState>>) -> bool {
    match event {
        Event::Push => {
            let st = state.borrow();
            let mx = fltk::app::event_x() - wid.x();
            let my = fltk::app::event_y() - wid.y();
            let show_back = matches!(st.route, Route::Post(_));
            let hit = hit_test(wid.w(), show_back, mx, my);
            let sender = st.sender.clone();
            drop(st);

            match hit {
                Some(HitZone::Home) => sender.send(Message::GoHome),
                Some(HitZone::Blog) => sender.send(Message::GoBlog),
                Some(HitZone::Back) => sender.send(Message::GoBack),
                Some(HitZone::Toggle) => sender.send(Message::ToggleDarkMode),
                None => return false,
            }
            true
        }
        Event::Move => {
            let mut st = state.borrow_mut();
            let mx = fltk::app::event_x() - wid.x();
            let my = fltk::app::event_y() - wid.y();
            let show_back = matches!(st.route, Route::Post(_));
            let hover = hit_test(wid.w(), show_back, mx, my);
            if hover != st.hover {
                st.hover = hover;
                drop(st);
                wid.redraw();
            }
            true
        }
        Event::Enter => true,
        Event::Leave => {
            let mut st = state.borrow_mut();
            if st.hover.is_some() {
                st.hover = None;
                drop(st);
                wid.redraw();
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_zones() {
        let w = 800;
        assert_eq!(hit_test(w, false, H_PADDING + LOGO_W + 5, 10), Some(HitZone::Home));
        assert_eq!(
            hit_test(w, false, H_PADDING + LOGO_W + LINK_W + 5, 10),
            Some(HitZone::Blog)
        );
        assert_eq!(hit_test(w, false, w - H_PADDING - TOGGLE_W + 3, 10), Some(HitZone::Toggle));
        // Logo area is not clickable
        assert_eq!(hit_test(w, false, H_PADDING + 2, 10), None);
    }

    #[test]
    fn test_back_link_only_on_post_pages() {
        let w = 800;
        let back_mx = H_PADDING + LOGO_W + 2 * LINK_W + 5;
        assert_eq!(hit_test(w, true, back_mx, 10), Some(HitZone::Back));
        assert_eq!(hit_test(w, false, back_mx, 10), None);
    }

    #[test]
    fn test_hit_test_outside_bar() {
        assert_eq!(hit_test(800, false, 100, NAV_BAR_HEIGHT + 1), None);
        assert_eq!(hit_test(800, false, 100, -1), None);
    }
}
