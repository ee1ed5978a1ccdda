use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use term_folio::desktop::{DockAppId, Hit, IconId, Link, WindowId};
use term_folio::drivers::{BufferOutputDriver, OutputDriver};
use term_folio::links::RecordingLinkOpener;
use term_folio::views::{DesktopView, View};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn down(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

fn up(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

fn drag(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

fn render(view: &mut DesktopView, output: &mut BufferOutputDriver) {
    let mut result = Ok(());
    output.draw(|frame| result = view.render(frame)).unwrap();
    result.unwrap();
}

fn setup() -> (DesktopView, BufferOutputDriver, RecordingLinkOpener) {
    let links = RecordingLinkOpener::default();
    let mut view = DesktopView::new(Box::new(links.clone()));
    let mut output = BufferOutputDriver::new(120, 36).unwrap();
    render(&mut view, &mut output);
    (view, output, links)
}

fn rect_of(view: &DesktopView, hit: Hit) -> Rect {
    let scene = view.scene();
    scene.find(hit).and_then(|node| scene.rect(node)).unwrap()
}

fn click(view: &mut DesktopView, column: u16, row: u16, now: Instant) {
    view.handle_event(&down(column, row), now).unwrap();
    view.handle_event(&up(column, row), now).unwrap();
}

#[test]
fn first_frame_shows_nav_bar_notes_and_dock() {
    let (_view, output, _) = setup();
    let lines = output.lines();
    assert!(lines[0].contains("CONTACT"));
    assert!(lines[0].contains("RESUME"));
    assert!(lines.iter().any(|l| l.contains("Sticky Note")));
    assert!(lines.iter().any(|l| l.contains("Drink water")));
    assert!(lines[34].contains("[F]"));
    assert!(lines.iter().any(|l| l.contains("About Me")));
}

#[test]
fn outside_click_closes_terminal_inside_click_keeps_it() {
    let (mut view, mut output, _) = setup();
    let now = Instant::now();
    view.desktop_mut().open_window(WindowId::Terminal);
    render(&mut view, &mut output);

    let body = rect_of(&view, Hit::Content(WindowId::Terminal));
    click(&mut view, body.x + 2, body.y + 2, now);
    assert!(view.desktop().is_open(WindowId::Terminal));

    click(&mut view, 60, 28, now);
    assert!(!view.desktop().is_open(WindowId::Terminal));
    assert!(view.desktop().is_open(WindowId::Notes));
}

/// First cell (row-major) whose topmost hit region satisfies `want`.
fn cell_where(view: &DesktopView, want: impl Fn(Hit) -> bool) -> (u16, u16) {
    let scene = view.scene();
    (0..36u16)
        .flat_map(|row| (0..120u16).map(move |column| (column, row)))
        .find(|&(column, row)| {
            scene
                .hit_test(column, row)
                .and_then(|node| scene.tag(node))
                .is_some_and(&want)
        })
        .unwrap()
}

fn bare_desktop_cell(view: &DesktopView) -> (u16, u16) {
    cell_where(view, |hit| hit == Hit::Desktop)
}

fn visible_icon_cell(view: &DesktopView) -> (u16, u16) {
    cell_where(view, |hit| matches!(hit, Hit::Icon(_)))
}

#[test]
fn cards_and_showcases_close_on_any_click_outside() {
    let windows = [
        WindowId::Project1,
        WindowId::Project2,
        WindowId::Project3,
        WindowId::Project4,
        WindowId::DontLook,
        WindowId::Photos,
        WindowId::MediaPlayer,
        WindowId::Contact,
        WindowId::Finder,
    ];
    for id in windows {
        let (mut view, mut output, _) = setup();
        let now = Instant::now();
        view.desktop_mut().open_window(id);
        render(&mut view, &mut output);

        let body = rect_of(&view, Hit::Content(id));
        click(&mut view, body.x + 1, body.y + 1, now);
        assert!(view.desktop().is_open(id), "{id} closed by a click inside");

        render(&mut view, &mut output);
        let (column, row) = bare_desktop_cell(&view);
        click(&mut view, column, row, now);
        assert!(!view.desktop().is_open(id), "{id} survived a desktop click");

        view.desktop_mut().open_window(id);
        render(&mut view, &mut output);
        let (column, row) = visible_icon_cell(&view);
        click(&mut view, column, row, now + Duration::from_secs(5));
        assert!(!view.desktop().is_open(id), "{id} survived an icon click");
    }
}

#[test]
fn about_windows_close_only_on_bare_desktop_and_notes_never() {
    let (mut view, mut output, _) = setup();
    let now = Instant::now();
    view.desktop_mut().launch_icon(IconId::About);
    view.desktop_mut().open_window(WindowId::Resume);
    render(&mut view, &mut output);

    let (column, row) = visible_icon_cell(&view);
    click(&mut view, column, row, now);
    for id in WindowId::ABOUT_SET {
        assert!(view.desktop().is_open(id), "{id} closed by an icon click");
    }
    assert!(view.desktop().is_open(WindowId::Resume));

    render(&mut view, &mut output);
    let (column, row) = bare_desktop_cell(&view);
    click(&mut view, column, row, now + Duration::from_secs(5));
    for id in WindowId::ABOUT_SET {
        assert!(!view.desktop().is_open(id), "{id} survived a desktop click");
    }
    assert!(!view.desktop().is_open(WindowId::Resume));
    assert!(view.desktop().is_open(WindowId::Notes));
}

#[test]
fn dragging_a_header_is_clamped_to_the_desktop() {
    let (mut view, _output, _) = setup();
    let now = Instant::now();
    let header = rect_of(&view, Hit::Header(WindowId::Notes));
    let (x, y) = (header.x + 10, header.y);
    view.handle_event(&down(x, y), now).unwrap();
    view.handle_event(&drag(x + 200, y), now).unwrap();
    view.handle_event(&drag(x + 200, 0), now).unwrap();
    view.handle_event(&up(x + 200, 0), now).unwrap();

    let pos = view.desktop().window_position(WindowId::Notes).unwrap();
    assert_eq!(pos.x, 90.0);
    assert_eq!(pos.y, 1.0);
    assert!(view.desktop().dragging().is_none());
}

#[test]
fn double_click_on_about_opens_the_about_set() {
    let (mut view, _output, _) = setup();
    let now = Instant::now();
    let icon = rect_of(&view, Hit::Icon(IconId::About));
    click(&mut view, icon.x + 1, icon.y + 1, now);
    assert!(!view.desktop().is_open(WindowId::AboutInfo));
    click(&mut view, icon.x + 1, icon.y + 1, now + Duration::from_millis(200));
    for id in WindowId::ABOUT_SET {
        assert!(view.desktop().is_open(id), "{id} should be open");
    }
    assert_eq!(view.desktop().topmost(), Some(WindowId::AboutInfo));
}

#[test]
fn slow_clicks_do_not_launch() {
    let (mut view, _output, _) = setup();
    let now = Instant::now();
    let icon = rect_of(&view, Hit::Icon(IconId::Resume));
    click(&mut view, icon.x + 1, icon.y + 1, now);
    click(&mut view, icon.x + 1, icon.y + 1, now + Duration::from_secs(2));
    assert!(!view.desktop().is_open(WindowId::Resume));
    assert_eq!(view.desktop().selected_icon(), Some(IconId::Resume));
}

#[test]
fn dock_terminal_toggles_the_terminal_window() {
    let (mut view, mut output, _) = setup();
    let now = Instant::now();
    let app = rect_of(&view, Hit::DockApp(DockAppId::Terminal));
    click(&mut view, app.x + 1, app.y + 1, now);
    assert!(view.desktop().is_open(WindowId::Terminal));
    assert!(view.desktop().dock().is_running(DockAppId::Terminal));

    render(&mut view, &mut output);
    click(&mut view, app.x + 1, app.y + 1, now);
    assert!(!view.desktop().is_open(WindowId::Terminal));
    assert!(!view.desktop().dock().is_running(DockAppId::Terminal));
}

#[test]
fn resume_download_link_goes_through_the_opener() {
    let (mut view, mut output, links) = setup();
    let now = Instant::now();
    let nav = rect_of(&view, Hit::NavButton(term_folio::desktop::NavButton::Resume));
    click(&mut view, nav.x + 1, nav.y, now);
    assert!(view.desktop().is_open(WindowId::Resume));

    render(&mut view, &mut output);
    let link = rect_of(&view, Hit::Link(Link::ResumePdf));
    click(&mut view, link.x + 1, link.y, now);
    assert_eq!(links.opened(), vec![Link::ResumePdf.url().to_string()]);
    assert!(view.desktop().is_open(WindowId::Resume));
}

#[test]
fn shrinking_the_terminal_pulls_windows_back_inside() {
    let (mut view, mut output, _) = setup();
    view.desktop_mut().open_window(WindowId::DontLook);
    output.resize(60, 20).unwrap();
    render(&mut view, &mut output);

    let viewport = view.desktop().viewport();
    assert_eq!(viewport.width, 60.0);
    assert_eq!(viewport.height, 17.0);
    for id in view.desktop().open_windows() {
        let rect = view.desktop().window_rect(id).unwrap();
        assert!(rect.x + rect.width <= 60, "{id} overflows horizontally");
        assert!(rect.y >= 1 && rect.y + rect.height <= 17, "{id} overflows vertically");
    }
}
