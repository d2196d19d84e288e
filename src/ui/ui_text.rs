/// Every user-visible string in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub online_badge: &'static str,
    pub footer: &'static str,

    // Map
    pub map_heading: &'static str,
    pub station_info_heading: &'static str,
    pub transfers_label: &'static str,
    pub first_train_label: &'static str,
    pub last_train_label: &'static str,
    pub interval_label: &'static str,
    pub plan_route_button: &'static str,
    pub map_empty_hint: &'static str,

    // Route
    pub route_planner_heading: &'static str,
    pub route_result_heading: &'static str,
    pub from_label: &'static str,
    pub to_label: &'static str,
    pub from_placeholder: &'static str,
    pub to_placeholder: &'static str,
    pub swap_button: &'static str,
    pub search_button: &'static str,
    pub travel_time_label: &'static str,
    pub transfers_count_label: &'static str,
    pub no_transfers: &'static str,
    pub minutes_suffix: &'static str,
    pub buy_ticket_button: &'static str,
    pub share_route_button: &'static str,
    pub route_empty_hint: &'static str,
    pub route_mode_mock_hint: &'static str,

    // Tickets
    pub buy_tab: &'static str,
    pub my_tickets_tab: &'static str,
    pub buy_button: &'static str,
    pub payment_methods_heading: &'static str,
    pub payment_methods: &'static [&'static str],
    pub ticket_active: &'static str,
    pub ticket_used: &'static str,
    pub valid_until_label: &'static str,
    pub rides_left_label: &'static str,
    pub qr_button: &'static str,
    pub transfer_ticket_button: &'static str,
    pub no_tickets: &'static str,
    pub buy_first_ticket_button: &'static str,

    // Schedule
    pub schedule_heading: &'static str,
    pub refresh_button: &'static str,
    pub pick_station_label: &'static str,
    pub platform_label: &'static str,
    pub status_on_time: &'static str,
    pub status_arriving: &'static str,
    pub status_delayed_prefix: &'static str,
    pub opening_hours_heading: &'static str,
    pub weekdays_label: &'static str,
    pub weekends_label: &'static str,
    pub notifications_heading: &'static str,
    pub notifications_hint: &'static str,
    pub notifications_button: &'static str,
    pub tips_heading: &'static str,
    pub tips: &'static [&'static str],

    // Help
    pub help_heading: &'static str,
    pub help_toggle: &'static str,
    pub help_close: &'static str,
    pub help_switch_tab: &'static str,
    pub help_hint: &'static str,
    pub wallet_count_label: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "MetroConnect",
    app_subtitle: "Умная навигация в метро",
    online_badge: "🕒 Онлайн",
    footer: "MetroConnect © 2024 · Быстрая и надёжная навигация",

    map_heading: "Интерактивная карта метро",
    station_info_heading: "Информация о станции",
    transfers_label: "⇄ Пересадки",
    first_train_label: "Первый поезд:",
    last_train_label: "Последний поезд:",
    interval_label: "Интервал:",
    plan_route_button: "🧭 Построить маршрут",
    map_empty_hint: "Выберите станцию на карте для просмотра информации",

    route_planner_heading: "Планировщик маршрута",
    route_result_heading: "Результат поиска",
    from_label: "📍 Откуда",
    to_label: "📍 Куда",
    from_placeholder: "Выберите станцию отправления",
    to_placeholder: "Выберите станцию назначения",
    swap_button: "⇅",
    search_button: "🔍 Найти маршрут",
    travel_time_label: "Время в пути",
    transfers_count_label: "Пересадок:",
    no_transfers: "без пересадок",
    minutes_suffix: "мин",
    buy_ticket_button: "🎫 Купить билет",
    share_route_button: "🔗 Поделиться маршрутом",
    route_empty_hint: "Выберите станции отправления и назначения для расчёта маршрута",
    route_mode_mock_hint: "Режимы учитываются только при расчёте по схеме",

    buy_tab: "🛒 Купить билет",
    my_tickets_tab: "👛 Мои билеты",
    buy_button: "+ Купить",
    payment_methods_heading: "Способы оплаты:",
    payment_methods: &[
        "💳 Банковские карты (Visa, MasterCard, МИР)",
        "📱 Apple Pay, Google Pay, Samsung Pay",
        "👛 Электронные кошельки",
    ],
    ticket_active: "Активен",
    ticket_used: "Использован",
    valid_until_label: "Действителен до:",
    rides_left_label: "Осталось поездок:",
    qr_button: "QR-код",
    transfer_ticket_button: "Передать",
    no_tickets: "У вас пока нет билетов",
    buy_first_ticket_button: "Купить первый билет",

    schedule_heading: "Расписание поездов",
    refresh_button: "⟳ Обновить",
    pick_station_label: "Выберите станцию",
    platform_label: "Платформа",
    status_on_time: "По расписанию",
    status_arriving: "Прибывает",
    status_delayed_prefix: "Задержка",
    opening_hours_heading: "Время работы",
    weekdays_label: "Будние дни",
    weekends_label: "Выходные",
    notifications_heading: "Уведомления",
    notifications_hint: "Получайте уведомления о задержках и изменениях в расписании",
    notifications_button: "🔔 Настроить уведомления",
    tips_heading: "Полезная информация",
    tips: &[
        "• Приходите за 5 минут до отправления",
        "• Соблюдайте правила безопасности",
        "• Уступайте места льготникам",
    ],

    help_heading: "⌨️ Горячие клавиши",
    help_toggle: "Показать или скрыть эту справку",
    help_close: "Закрыть справку",
    help_switch_tab: "Перейти на вкладку",
    help_hint: "H: горячие клавиши",
    wallet_count_label: "🎫 Билетов:",
};
