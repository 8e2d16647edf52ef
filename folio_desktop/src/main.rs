//! Folio Desktop - Entry point for the Iced portfolio application.

use folio_desktop::contact;
use folio_desktop::content;
use folio_desktop::styles::{
    card_style, editor_style, input_style, link_button_style, menu_panel_style, menu_toggle_style,
    nav_link_style, navbar_style, outline_button_style, primary_button_style,
    scroll_top_button_style, submit_button_style, tag_style, veil_style,
};
use folio_desktop::{
    app_theme, palette, ContactForm, FolioConfig, GlobeNetworkCanvas, GlobeNetworkState, MenuState,
    PaletteColors, Section, SectionReveal, SendState, SwarmFieldCanvas, SwarmFieldState,
    TypingState, VeilState, ABOUT_SECTION_HEIGHT, COMPACT_NAV_WIDTH, CONTACT_RESET_SECS,
    CONTACT_SECTION_HEIGHT, FOOTER_HEIGHT, GLOBE_SURFACE, MENU_BUTTON_SIZE, NAVBAR_ELEVATE_OFFSET,
    NAVBAR_HEIGHT, NAV_SECTION_OFFSET, PARALLAX_RANGE, PROJECTS_SECTION_HEIGHT, PROJECT_CARD_WIDTH,
    REVEAL_SECTION_COUNT, REVEAL_VIEWPORT_MARGIN, SCROLL_TOP_SHOW_OFFSET, SECTION_MAX_WIDTH,
    SKILLS_SECTION_HEIGHT, SKILL_CARD_WIDTH, TICK_INTERVAL_MS, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use iced_fonts::bootstrap;

use iced::alignment::{Horizontal, Vertical};
use iced::time::{self, Duration};
use iced::widget::canvas::Canvas;
use iced::widget::text_editor;
use iced::widget::{
    button, column, container, operation, row, scrollable, stack, text, text_input, Space,
};
use iced::{event, mouse, window};
use iced::{Background, Color, Element, Event, Length, Point, Size, Subscription, Task, Vector};
use tracing::warn;

/// Application state.
struct App {
    config: FolioConfig,
    swarm: SwarmFieldState,
    /// Only constructed when the config enables the hero visual
    globe: Option<GlobeNetworkState>,
    typing: TypingState,
    veil: VeilState,
    menu: MenuState,
    /// Reveal animations for the sections below the hero, indexed by `reveal_slot`
    reveals: Vec<SectionReveal>,
    form: ContactForm,
    send_state: SendState,
    /// Absolute scroll offset of the page scrollable
    scroll_offset: f32,
    /// Logical window size, tracked from window events
    window: Size,
    /// Pointer-driven shift applied to the hero globe
    parallax: Vector,
    active_section: Section,
    navbar_elevated: bool,
    show_scroll_top: bool,
    /// Error message if initialization failed
    init_error: Option<String>,
}

/// Application messages.
#[derive(Debug, Clone)]
enum Message {
    Tick,
    /// The page scrollable reported a new absolute offset
    PageScrolled(f32),
    /// A navigation link or call-to-action button was pressed
    NavClicked(Section),
    ScrollToTop,
    ToggleMenu,
    CloseMenu,
    WindowResized(Size),
    PointerMoved(Point),
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    SubmitContact,
    /// Outcome of the contact form delivery
    ContactResult(Result<(), String>),
    /// Restore the submit button label a few seconds after a send
    ResetSendState,
    OpenLink(&'static str),
}

/// Scrollable ID for programmatic scrolling
fn scroll_id() -> iced::widget::Id {
    iced::widget::Id::new("page-scroll")
}

/// Maps a section to its index in the reveal list. The hero has no reveal.
fn reveal_slot(section: Section) -> Option<usize> {
    match section {
        Section::Home => None,
        Section::About => Some(0),
        Section::Projects => Some(1),
        Section::Skills => Some(2),
        Section::Contact => Some(3),
    }
}

fn handle_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Opened { size, .. }) => Some(Message::WindowResized(size)),
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        _ => None,
    }
}

impl App {
    /// Starts the application, falling back to an error view when setup
    /// fails.
    fn init() -> (Self, Task<Message>) {
        match Self::try_init() {
            Ok(app) => (app, Task::none()),
            Err(err) => {
                eprintln!("folio failed to start: {err}");
                (Self::error_state(err.to_string()), Task::none())
            }
        }
    }

    /// Builds the app from the on-disk config.
    fn try_init() -> anyhow::Result<Self> {
        let config = FolioConfig::load_or_default()?;

        let mut swarm = SwarmFieldState::new(WINDOW_WIDTH, WINDOW_HEIGHT);
        swarm.field.set_audio_reactivity(config.audio_reactivity);

        let globe = config
            .globe_enabled
            .then(|| GlobeNetworkState::new(GLOBE_SURFACE, GLOBE_SURFACE, config.reduced_detail));

        let mut app = Self {
            config,
            swarm,
            globe,
            typing: TypingState::new(content::HERO_TITLE.chars().count()),
            veil: VeilState::default(),
            menu: MenuState::default(),
            reveals: (0..REVEAL_SECTION_COUNT)
                .map(|_| SectionReveal::default())
                .collect(),
            form: ContactForm::default(),
            send_state: SendState::default(),
            scroll_offset: 0.0,
            window: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            parallax: Vector::new(0.0, 0.0),
            active_section: Section::Home,
            navbar_elevated: false,
            show_scroll_top: false,
            init_error: None,
        };
        app.refresh_scroll_state();
        Ok(app)
    }

    fn error_state(error: String) -> Self {
        Self {
            config: FolioConfig::default(),
            swarm: SwarmFieldState::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            globe: None,
            typing: TypingState::new(content::HERO_TITLE.chars().count()),
            veil: VeilState::default(),
            menu: MenuState::default(),
            reveals: (0..REVEAL_SECTION_COUNT)
                .map(|_| SectionReveal::default())
                .collect(),
            form: ContactForm::default(),
            send_state: SendState::default(),
            scroll_offset: 0.0,
            window: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            parallax: Vector::new(0.0, 0.0),
            active_section: Section::Home,
            navbar_elevated: false,
            show_scroll_top: false,
            init_error: Some(error),
        }
    }

    /// Returns true when the window is narrow enough for the hamburger menu.
    fn is_compact(&self) -> bool {
        self.window.width <= COMPACT_NAV_WIDTH
    }

    /// Top edge of a section in page coordinates. The hero spans the full
    /// window height, every other section has a fixed height.
    fn section_top(&self, section: Section) -> f32 {
        let hero = self.window.height;
        match section {
            Section::Home => 0.0,
            Section::About => hero,
            Section::Projects => hero + ABOUT_SECTION_HEIGHT,
            Section::Skills => hero + ABOUT_SECTION_HEIGHT + PROJECTS_SECTION_HEIGHT,
            Section::Contact => {
                hero + ABOUT_SECTION_HEIGHT + PROJECTS_SECTION_HEIGHT + SKILLS_SECTION_HEIGHT
            }
        }
    }

    /// Recomputes everything derived from the scroll offset: the highlighted
    /// nav link, the navbar shadow, the scroll-to-top button and one-shot
    /// section reveals.
    fn refresh_scroll_state(&mut self) {
        self.navbar_elevated = self.scroll_offset > NAVBAR_ELEVATE_OFFSET;
        self.show_scroll_top = self.scroll_offset > SCROLL_TOP_SHOW_OFFSET;

        // The last section whose top has passed the offset line wins
        for section in Section::ALL {
            if self.scroll_offset >= self.section_top(section) - NAV_SECTION_OFFSET {
                self.active_section = section;
            }
        }

        // A section starts revealing shortly before its top enters the viewport
        let reveal_line = self.scroll_offset + self.window.height - REVEAL_VIEWPORT_MARGIN;
        for section in Section::ALL {
            let Some(slot) = reveal_slot(section) else {
                continue;
            };
            if self.section_top(section) < reveal_line {
                self.reveals[slot].trigger();
            }
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                if self.config.background_enabled {
                    self.swarm.update();
                }
                if let Some(globe) = &mut self.globe {
                    globe.update();
                }
                self.typing.update();
                self.veil.update();
                self.menu.update();
                for reveal in &mut self.reveals {
                    reveal.update();
                }
            }
            Message::PageScrolled(offset) => {
                self.scroll_offset = offset;
                self.refresh_scroll_state();
            }
            Message::NavClicked(section) => {
                self.menu.close();
                // Stop just below the navbar so the heading stays visible
                let target = (self.section_top(section) - NAVBAR_HEIGHT).max(0.0);
                self.scroll_offset = target;
                self.refresh_scroll_state();
                return operation::scroll_to(
                    scroll_id(),
                    scrollable::AbsoluteOffset { x: 0.0, y: target },
                );
            }
            Message::ScrollToTop => {
                self.scroll_offset = 0.0;
                self.refresh_scroll_state();
                return operation::scroll_to(
                    scroll_id(),
                    scrollable::AbsoluteOffset { x: 0.0, y: 0.0 },
                );
            }
            Message::ToggleMenu => {
                self.menu.toggle();
            }
            Message::CloseMenu => {
                self.menu.close();
            }
            Message::WindowResized(size) => {
                self.window = size;
                self.swarm.resize(size.width, size.height);
                if !self.is_compact() {
                    self.menu.close();
                }
                // Section tops move with the hero height
                self.refresh_scroll_state();
            }
            Message::PointerMoved(position) => {
                if self.globe.is_some() && !self.is_compact() {
                    self.parallax = Vector::new(
                        position.x / self.window.width * PARALLAX_RANGE,
                        position.y / self.window.height * PARALLAX_RANGE,
                    );
                }
            }
            Message::NameChanged(value) => {
                self.form.name = value;
            }
            Message::EmailChanged(value) => {
                self.form.email = value;
            }
            Message::MessageEdited(action) => {
                self.form.message.perform(action);
            }
            Message::SubmitContact => {
                if self.send_state.is_sending() || !self.form.is_valid() {
                    return Task::none();
                }
                self.send_state = SendState::Sending;
                let endpoint = self.config.contact_endpoint.clone();
                let payload = self.form.payload();
                return Task::future(async move {
                    let result = contact::send(endpoint, payload).await;
                    Message::ContactResult(result.map_err(|err| err.to_string()))
                });
            }
            Message::ContactResult(result) => {
                match result {
                    Ok(()) => {
                        self.send_state = SendState::Sent;
                        self.form.reset();
                    }
                    Err(err) => {
                        self.send_state = SendState::Failed;
                        warn!("contact submission failed: {err}");
                    }
                }
                return Task::future(async {
                    tokio::time::sleep(Duration::from_secs(CONTACT_RESET_SECS)).await;
                    Message::ResetSendState
                });
            }
            Message::ResetSendState => {
                // A fresh submission may already be in flight
                if !self.send_state.is_sending() {
                    self.send_state = SendState::Idle;
                }
            }
            Message::OpenLink(url) => {
                if let Err(e) = open::that(url) {
                    warn!("failed to open {url}: {e}");
                }
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let ticks = time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(|_| Message::Tick);
        let events = event::listen_with(handle_event);
        Subscription::batch(vec![ticks, events])
    }

    fn view(&self) -> Element<'_, Message> {
        let pal = palette();

        if let Some(ref error) = self.init_error {
            return self.error_view(error, pal);
        }

        let background: Element<'_, Message> = if self.config.background_enabled {
            Canvas::new(SwarmFieldCanvas::<Message>::new(&self.swarm, pal))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(move |_| container::Style {
                    background: Some(Background::Color(pal.background)),
                    ..Default::default()
                })
                .into()
        };

        let page = scrollable(
            column![
                self.hero_section(pal),
                self.about_section(pal),
                self.projects_section(pal),
                self.skills_section(pal),
                self.contact_section(pal),
                self.footer(pal),
            ]
            .width(Length::Fill),
        )
        .id(scroll_id())
        .on_scroll(|viewport| Message::PageScrolled(viewport.absolute_offset().y))
        .width(Length::Fill)
        .height(Length::Fill);

        // Use progress instead of is_open to avoid a pop during the close animation
        let menu_overlay: Element<'_, Message> = if self.menu.progress() > 0.01 {
            self.menu_overlay(pal)
        } else {
            Space::new().into()
        };

        let scroll_top: Element<'_, Message> = if self.show_scroll_top {
            let arrow = bootstrap::arrow_up()
                .size(16)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center);
            container(
                button(
                    container(arrow)
                        .width(Length::Fixed(MENU_BUTTON_SIZE))
                        .height(Length::Fixed(MENU_BUTTON_SIZE))
                        .align_x(Horizontal::Center)
                        .align_y(Vertical::Center),
                )
                .on_press(Message::ScrollToTop)
                .style(scroll_top_button_style(pal))
                .padding(0),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(24)
            .into()
        } else {
            Space::new().into()
        };

        let veil: Element<'_, Message> = if self.veil.opacity > 0.0 {
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(veil_style(pal, self.veil.opacity))
                .into()
        } else {
            Space::new().into()
        };

        let content = stack(vec![
            background,
            page.into(),
            self.navbar(pal),
            scroll_top,
            menu_overlay,
            veil,
        ]);
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn error_view(&self, error: &str, pal: PaletteColors) -> Element<'_, Message> {
        let detail = error.to_string();
        container(
            column![
                text("Folio could not start")
                    .size(30)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.danger)
                    }),
                text(detail)
                    .size(15)
                    .align_x(Horizontal::Center)
                    .width(Length::Fixed(520.0))
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.muted)
                    }),
            ]
            .spacing(12)
            .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
    }

    /// Fixed translucent bar pinned over the top of the page.
    fn navbar(&self, pal: PaletteColors) -> Element<'_, Message> {
        let brand = button(
            text(content::NAV_BRAND)
                .size(20)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.accent),
                }),
        )
        .padding([8, 12])
        .style(move |_theme, _status| button::Style {
            background: None,
            text_color: pal.accent,
            ..Default::default()
        })
        .on_press(Message::NavClicked(Section::Home));

        let links: Element<'_, Message> = if self.is_compact() {
            let toggle_icon = bootstrap::list()
                .size(20)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center);
            button(
                container(toggle_icon)
                    .width(Length::Fixed(MENU_BUTTON_SIZE))
                    .height(Length::Fixed(MENU_BUTTON_SIZE))
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            )
            .on_press(Message::ToggleMenu)
            .style(menu_toggle_style(pal, self.menu.is_open()))
            .padding(0)
            .into()
        } else {
            row(Section::ALL
                .iter()
                .map(|section| {
                    button(text(section.label()).size(14))
                        .padding([8, 14])
                        .style(nav_link_style(pal, self.active_section == *section))
                        .on_press(Message::NavClicked(*section))
                        .into()
                })
                .collect::<Vec<Element<'_, Message>>>())
            .spacing(4)
            .into()
        };

        container(
            row![brand, Space::new().width(Length::Fill), links]
                .align_y(iced::Alignment::Center)
                .padding([0, 24]),
        )
        .width(Length::Fill)
        .height(Length::Fixed(NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(navbar_style(pal, self.navbar_elevated))
        .into()
    }

    /// Full-screen navigation overlay for compact windows.
    fn menu_overlay(&self, pal: PaletteColors) -> Element<'_, Message> {
        let progress = self.menu.progress();

        let panel = container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(menu_panel_style(pal, progress));

        let links = column(
            Section::ALL
                .iter()
                .map(|section| {
                    button(text(section.label()).size(22))
                        .padding([10, 24])
                        .style(nav_link_style(pal, self.active_section == *section))
                        .on_press(Message::NavClicked(*section))
                        .into()
                })
                .collect::<Vec<Element<'_, Message>>>(),
        )
        .spacing(8)
        .align_x(iced::Alignment::Center);

        let content: Element<'_, Message> = if progress > 0.2 {
            container(links)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .into()
        } else {
            Space::new().into()
        };

        let close_icon = bootstrap::x_lg()
            .size(20)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(move |_| iced::widget::text::Style {
                color: Some(pal.muted),
            });

        let close_btn = button(
            container(close_icon)
                .width(Length::Fixed(MENU_BUTTON_SIZE))
                .height(Length::Fixed(MENU_BUTTON_SIZE))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .on_press(Message::CloseMenu)
        .style(menu_toggle_style(pal, true))
        .padding(0);

        let close_positioned = row![
            Space::new().width(Length::Fill),
            container(close_btn).padding(16),
        ];

        stack(vec![panel.into(), content, close_positioned.into()]).into()
    }

    /// Full-height hero with the typed title and the globe visual.
    fn hero_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let title: String = content::HERO_TITLE
            .chars()
            .take(self.typing.revealed)
            .collect();

        let heading = column![
            text(title).size(50),
            text(content::HERO_SUBTITLE)
                .size(22)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.accent)
                }),
            text(content::HERO_TAGLINE)
                .size(15)
                .align_x(Horizontal::Center)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.muted)
                })
                .width(Length::Fixed(560.0)),
        ]
        .spacing(14)
        .align_x(iced::Alignment::Center);

        let actions = row![
            button(text(content::HERO_PRIMARY_CTA).size(15))
                .padding([12, 28])
                .style(primary_button_style(pal))
                .on_press(Message::NavClicked(Section::Projects)),
            button(text(content::HERO_SECONDARY_CTA).size(15))
                .padding([12, 28])
                .style(outline_button_style(pal))
                .on_press(Message::NavClicked(Section::Contact)),
        ]
        .spacing(16);

        let globe_visual: Element<'_, Message> = if let Some(globe) = &self.globe {
            Canvas::new(GlobeNetworkCanvas::<Message>::new(globe, pal, self.parallax))
                .width(Length::Fixed(GLOBE_SURFACE))
                .height(Length::Fixed(GLOBE_SURFACE))
                .into()
        } else {
            Space::new().height(Length::Fixed(GLOBE_SURFACE)).into()
        };

        container(
            column![heading, actions, globe_visual]
                .spacing(26)
                .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(self.window.height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(iced::Padding {
            top: NAVBAR_HEIGHT,
            bottom: NAVBAR_HEIGHT,
            right: 0.0,
            left: 0.0,
        })
        .into()
    }

    fn about_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let paragraphs = column(
            content::ABOUT_PARAGRAPHS
                .iter()
                .map(|paragraph| text(*paragraph).size(15).into())
                .collect::<Vec<Element<'_, Message>>>(),
        )
        .spacing(14)
        .width(Length::Fixed(640.0));

        let stats = row(
            content::STATS
                .iter()
                .map(|stat| {
                    container(
                        column![
                            text(stat.value)
                                .size(30)
                                .style(move |_| iced::widget::text::Style {
                                    color: Some(pal.accent)
                                }),
                            text(stat.label)
                                .size(12)
                                .style(move |_| iced::widget::text::Style {
                                    color: Some(pal.muted)
                                }),
                        ]
                        .spacing(4)
                        .align_x(iced::Alignment::Center),
                    )
                    .padding([16, 24])
                    .style(card_style(pal))
                    .into()
                })
                .collect::<Vec<Element<'_, Message>>>(),
        )
        .spacing(16);

        let body = column![
            section_heading(content::ABOUT_HEADING, pal),
            paragraphs,
            stats,
        ]
        .spacing(28)
        .align_x(iced::Alignment::Center);

        self.reveal_wrap(
            Section::About,
            pal,
            section_shell(ABOUT_SECTION_HEIGHT, body.into()),
        )
    }

    fn projects_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let mut grid = column![].spacing(20).align_x(iced::Alignment::Center);
        for pair in content::PROJECTS.chunks(2) {
            let mut cards = row![].spacing(20);
            for project in pair {
                cards = cards.push(self.project_card(project, pal));
            }
            grid = grid.push(cards);
        }

        let body = column![section_heading(content::PROJECTS_HEADING, pal), grid]
            .spacing(28)
            .align_x(iced::Alignment::Center);

        self.reveal_wrap(
            Section::Projects,
            pal,
            section_shell(PROJECTS_SECTION_HEIGHT, body.into()),
        )
    }

    fn project_card(
        &self,
        project: &'static content::Project,
        pal: PaletteColors,
    ) -> Element<'_, Message> {
        let tags = row(project
            .stack
            .iter()
            .map(|tag| {
                container(text(*tag).size(11))
                    .padding([4, 10])
                    .style(tag_style(pal))
                    .into()
            })
            .collect::<Vec<Element<'_, Message>>>())
        .spacing(8);

        let link = button(
            row![
                text("View Project").size(13),
                bootstrap::box_arrow_up_right().size(11),
            ]
            .spacing(6)
            .align_y(iced::Alignment::Center),
        )
        .padding(0)
        .style(link_button_style(pal))
        .on_press(Message::OpenLink(project.link));

        container(
            column![
                text(project.title).size(18),
                text(project.summary)
                    .size(13)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.muted)
                    }),
                tags,
                link,
            ]
            .spacing(12),
        )
        .padding(20)
        .width(Length::Fixed(PROJECT_CARD_WIDTH))
        .style(card_style(pal))
        .into()
    }

    fn skills_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let groups = row(
            content::SKILL_GROUPS
                .iter()
                .map(|group| {
                    let skills = column(
                        group
                            .skills
                            .iter()
                            .map(|skill| text(*skill).size(13).into())
                            .collect::<Vec<Element<'_, Message>>>(),
                    )
                    .spacing(8)
                    .align_x(iced::Alignment::Center);

                    container(
                        column![
                            text(group.title)
                                .size(16)
                                .style(move |_| iced::widget::text::Style {
                                    color: Some(pal.accent)
                                }),
                            skills,
                        ]
                        .spacing(14)
                        .align_x(iced::Alignment::Center),
                    )
                    .padding(20)
                    .width(Length::Fixed(SKILL_CARD_WIDTH))
                    .style(card_style(pal))
                    .into()
                })
                .collect::<Vec<Element<'_, Message>>>(),
        )
        .spacing(20);

        let body = column![section_heading(content::SKILLS_HEADING, pal), groups]
            .spacing(28)
            .align_x(iced::Alignment::Center);

        self.reveal_wrap(
            Section::Skills,
            pal,
            section_shell(SKILLS_SECTION_HEIGHT, body.into()),
        )
    }

    fn contact_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let socials = row(
            content::SOCIAL_LINKS
                .iter()
                .map(|social| {
                    button(text(social.label).size(13))
                        .padding(0)
                        .style(link_button_style(pal))
                        .on_press(Message::OpenLink(social.url))
                        .into()
                })
                .collect::<Vec<Element<'_, Message>>>(),
        )
        .spacing(16);

        let info = column![
            text(content::CONTACT_BLURB).size(14),
            row![
                bootstrap::envelope()
                    .size(14)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.accent)
                    }),
                text(content::CONTACT_EMAIL).size(14),
            ]
            .spacing(10)
            .align_y(iced::Alignment::Center),
            row![
                bootstrap::geo_alt()
                    .size(14)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.accent)
                    }),
                text(content::CONTACT_LOCATION).size(14),
            ]
            .spacing(10)
            .align_y(iced::Alignment::Center),
            socials,
        ]
        .spacing(16)
        .width(Length::Fixed(320.0));

        let name_input = text_input("Your Name", &self.form.name)
            .on_input(Message::NameChanged)
            .padding(12)
            .size(14)
            .style(input_style(pal));

        let email_input = text_input("Your Email", &self.form.email)
            .on_input(Message::EmailChanged)
            .padding(12)
            .size(14)
            .style(input_style(pal));

        let message_input = text_editor(&self.form.message)
            .placeholder("Your Message")
            .on_action(Message::MessageEdited)
            .height(Length::Fixed(140.0))
            .padding(12)
            .size(14)
            .style(editor_style(pal));

        let submit_label = row![
            bootstrap::send().size(13),
            text(self.send_state.label()).size(14),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center);

        let mut submit = button(submit_label)
            .padding([12, 26])
            .style(submit_button_style(pal, self.send_state));
        if self.form.is_valid() && !self.send_state.is_sending() {
            submit = submit.on_press(Message::SubmitContact);
        }

        let form = column![name_input, email_input, message_input, submit]
            .spacing(14)
            .width(Length::Fixed(420.0));

        let body = column![
            section_heading(content::CONTACT_HEADING, pal),
            row![info, form].spacing(48),
        ]
        .spacing(28)
        .align_x(iced::Alignment::Center);

        self.reveal_wrap(
            Section::Contact,
            pal,
            section_shell(CONTACT_SECTION_HEIGHT, body.into()),
        )
    }

    fn footer(&self, pal: PaletteColors) -> Element<'_, Message> {
        container(
            text(content::FOOTER_NOTE)
                .size(13)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.muted)
                }),
        )
        .width(Length::Fill)
        .height(Length::Fixed(FOOTER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
    }

    /// Wraps a section body with its reveal animation: a shrinking spacer
    /// slides the content up while inherited text fades in.
    fn reveal_wrap<'a>(
        &self,
        section: Section,
        pal: PaletteColors,
        content: Element<'a, Message>,
    ) -> Element<'a, Message> {
        let Some(slot) = reveal_slot(section) else {
            return content;
        };
        let reveal = &self.reveals[slot];
        let progress = reveal.progress();
        let offset = reveal.offset();

        column![
            Space::new().height(Length::Fixed(offset)),
            container(content).style(move |_| container::Style {
                text_color: Some(Color {
                    a: progress,
                    ..pal.text
                }),
                ..Default::default()
            }),
        ]
        .into()
    }
}

/// Fixed-height band that centers a section body.
fn section_shell(height: f32, content: Element<'_, Message>) -> Element<'_, Message> {
    container(container(content).max_width(SECTION_MAX_WIDTH))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Section title over a short accent underline.
fn section_heading(title: &'static str, pal: PaletteColors) -> Element<'static, Message> {
    column![
        text(title).size(34),
        container(Space::new())
            .width(Length::Fixed(48.0))
            .height(Length::Fixed(3.0))
            .style(move |_| container::Style {
                background: Some(Background::Color(pal.accent)),
                ..Default::default()
            }),
    ]
    .spacing(10)
    .align_x(iced::Alignment::Center)
    .into()
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_desktop=info".into()),
        )
        .init();

    fn get_theme(_: &App) -> iced::Theme {
        app_theme()
    }

    iced::application(App::init, App::update, App::view)
        .title("Adrian Vasquez - Portfolio")
        .subscription(App::subscription)
        .theme(get_theme)
        .font(iced_fonts::BOOTSTRAP_FONT_BYTES)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::error_state(String::new());
        app.init_error = None;
        app
    }

    #[test]
    fn test_active_section_follows_scroll() {
        let mut app = test_app();
        assert_eq!(app.active_section, Section::Home);

        // Just before the about threshold
        app.scroll_offset = app.section_top(Section::About) - NAV_SECTION_OFFSET - 1.0;
        app.refresh_scroll_state();
        assert_eq!(app.active_section, Section::Home);

        // Crossing it highlights the about link
        app.scroll_offset = app.section_top(Section::About) - NAV_SECTION_OFFSET;
        app.refresh_scroll_state();
        assert_eq!(app.active_section, Section::About);

        // Deep into the page the last section wins
        app.scroll_offset = app.section_top(Section::Contact);
        app.refresh_scroll_state();
        assert_eq!(app.active_section, Section::Contact);
    }

    #[test]
    fn test_scroll_flags_follow_thresholds() {
        let mut app = test_app();
        app.scroll_offset = NAVBAR_ELEVATE_OFFSET + 1.0;
        app.refresh_scroll_state();
        assert!(app.navbar_elevated);
        assert!(!app.show_scroll_top);

        app.scroll_offset = SCROLL_TOP_SHOW_OFFSET + 1.0;
        app.refresh_scroll_state();
        assert!(app.navbar_elevated);
        assert!(app.show_scroll_top);

        app.scroll_offset = 0.0;
        app.refresh_scroll_state();
        assert!(!app.navbar_elevated);
        assert!(!app.show_scroll_top);
    }

    #[test]
    fn test_reveals_trigger_near_viewport_and_stay() {
        let mut app = test_app();
        app.refresh_scroll_state();
        let about = reveal_slot(Section::About).unwrap();
        let contact = reveal_slot(Section::Contact).unwrap();
        assert!(!app.reveals[about].triggered);

        // Scroll until the about section pokes into the viewport margin
        app.scroll_offset = REVEAL_VIEWPORT_MARGIN + 1.0;
        app.refresh_scroll_state();
        assert!(app.reveals[about].triggered);
        assert!(!app.reveals[contact].triggered);

        // Reveals are one-shot: scrolling back up keeps them triggered
        app.scroll_offset = 0.0;
        app.refresh_scroll_state();
        assert!(app.reveals[about].triggered);
    }

    #[test]
    fn test_section_tops_stack_in_order() {
        let app = test_app();
        let mut last = -1.0;
        for section in Section::ALL {
            let top = app.section_top(section);
            assert!(top > last);
            last = top;
        }
        assert_eq!(app.section_top(Section::Home), 0.0);
        assert_eq!(app.section_top(Section::About), app.window.height);
    }
}
