//! Цены по локациям и расчёт стоимости аккаунта.

use serde::Serialize;

/// Максимальный срок посуточной покупки.
pub const MAX_DAYS: u32 = 30;

/// Цена за сутки и за месяц, в рупиях.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServerPrice {
    pub daily: u64,
    pub monthly: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServerLocation {
    /// Ключ, совпадающий с servers.location
    pub key: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub prices: ServerPrice,
}

pub static SERVER_LOCATIONS: [ServerLocation; 2] = [
    ServerLocation {
        key: "singapore",
        code: "sg",
        name: "Singapore",
        prices: ServerPrice {
            daily: 340,
            monthly: 10_000,
        },
    },
    ServerLocation {
        key: "indonesia",
        code: "id",
        name: "Indonesia",
        prices: ServerPrice {
            daily: 400,
            monthly: 12_000,
        },
    },
];

/// Локация, цены которой берутся для неизвестных локаций.
pub fn default_location() -> &'static ServerLocation {
    &SERVER_LOCATIONS[0]
}

/// Найти локацию по ключу (без учёта регистра).
pub fn find_location(location: &str) -> Option<&'static ServerLocation> {
    let key = location.trim();
    SERVER_LOCATIONS
        .iter()
        .find(|l| l.key.eq_ignore_ascii_case(key))
}

/// Цены для локации сервера, с fallback на Singapore.
pub fn prices_for(location: &str) -> ServerPrice {
    find_location(location)
        .unwrap_or_else(default_location)
        .prices
}

/// Стоимость покупки.
///
/// Месячная покупка стоит `monthly_price` независимо от `days`.
/// Посуточная: `daily_price * max(1, days)`, отсутствующее значение считается за 1.
pub fn calculate_price(
    daily_price: u64,
    monthly_price: u64,
    is_monthly: bool,
    days: Option<i64>,
) -> u64 {
    if is_monthly {
        return monthly_price;
    }
    let days = days.unwrap_or(1).max(1) as u64;
    daily_price.saturating_mul(days)
}

/// Привести введённое число дней к диапазону [1, MAX_DAYS].
pub fn clamp_days(days: i64) -> u32 {
    days.clamp(1, MAX_DAYS as i64) as u32
}

/// Выбранный срок покупки.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duration {
    Monthly,
    Daily(u32),
}

impl Duration {
    /// Собрать срок из параметров запроса; дни приводятся к [1, MAX_DAYS].
    pub fn from_request(monthly: bool, days: Option<i64>) -> Self {
        if monthly {
            Duration::Monthly
        } else {
            Duration::Daily(clamp_days(days.unwrap_or(1)))
        }
    }

    pub fn is_monthly(&self) -> bool {
        matches!(self, Duration::Monthly)
    }

    pub fn days(&self) -> u32 {
        match self {
            Duration::Monthly => MAX_DAYS,
            Duration::Daily(days) => *days,
        }
    }
}

/// Расчёт стоимости для клиента.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub location: &'static str,
    pub monthly: bool,
    pub days: u32,
    pub unit_price: u64,
    pub total: u64,
    pub formatted_total: String,
}

/// Посчитать стоимость покупки на сервере в указанной локации.
pub fn quote(location: &str, duration: Duration) -> Quote {
    let loc = find_location(location).unwrap_or_else(default_location);
    let ServerPrice { daily, monthly } = loc.prices;
    let total = match duration {
        Duration::Monthly => calculate_price(daily, monthly, true, None),
        Duration::Daily(days) => calculate_price(daily, monthly, false, Some(days as i64)),
    };

    Quote {
        location: loc.key,
        monthly: duration.is_monthly(),
        days: duration.days(),
        unit_price: if duration.is_monthly() { monthly } else { daily },
        total,
        formatted_total: format_rupiah(total),
    }
}

/// Формат суммы в рупиях: "Rp 10.000".
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}
