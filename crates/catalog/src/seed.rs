//! Embedded product lists.
//!
//! `showcase_products` is the fixed list the storefront renders when no remote
//! endpoint is configured. `partner_products` is what the product API serves:
//! records aggregated from the klimatprof.online and breez.ru partner feeds.

use crate::product::Product;

const IMG_A: &str = "https://images.unsplash.com/photo-1585909695284-32d2985ac9c0?w=400&h=300&fit=crop";
const IMG_B: &str = "https://images.unsplash.com/photo-1631545805119-17cbd88d3d53?w=400&h=300&fit=crop";
const IMG_C: &str = "https://images.unsplash.com/photo-1634641283431-5c644bb6f944?w=400&h=300&fit=crop";

const WALL: &str = "Настенный";

pub fn showcase_products() -> Vec<Product> {
    let item = |id: u64, name: &str, brand: &str, power: f64, price: u64, image: &str| {
        Product::new(id, name, brand, WALL, price)
            .with_category("Кондиционеры")
            .with_power(power)
            .with_image(image)
    };

    vec![
        item(1, "Cooper&Hunter Nordic Premium", "Cooper&Hunter", 2.6, 42_900, IMG_A),
        item(2, "Daikin FTXS35K", "Daikin", 3.5, 68_500, IMG_B),
        item(3, "Mitsubishi Electric MSZ-LN25VG", "Mitsubishi", 2.5, 89_900, IMG_C),
        item(4, "Ballu BSVP-07HN1", "Ballu", 2.0, 28_900, IMG_A),
        item(5, "Electrolux EACS-12HLO", "Electrolux", 3.2, 35_900, IMG_B),
        item(6, "Haier Flexis AS25S2SF1FA", "Haier", 2.5, 52_900, IMG_C),
    ]
}

struct PartnerRow {
    id: &'static str,
    name: &'static str,
    brand: &'static str,
    series: &'static str,
    power: f64,
    price: u64,
    image: &'static str,
    features: [&'static str; 3],
}

const KLIMATPROF: &[PartnerRow] = &[
    PartnerRow { id: "kp_1", name: "Fujitsu ASYG09KMCC/AOYG09KMCC", brand: "Fujitsu", series: "Genios", power: 2.5, price: 49_900, image: IMG_A, features: ["Инвертор", "Wi-Fi управление", "Очистка воздуха"] },
    PartnerRow { id: "kp_2", name: "Lessar LS-H09KLA2A/LU-H09KLA2A", brand: "Lessar", series: "Stella", power: 2.6, price: 32_900, image: IMG_B, features: ["Инвертор", "Низкий уровень шума", "Режим сна"] },
    PartnerRow { id: "kp_3", name: "TOSOT T09H-SLyR/I/T09H-SLyR/O", brand: "TOSOT", series: "Lyra", power: 2.6, price: 38_900, image: IMG_C, features: ["Инвертор", "Самоочистка", "LED дисплей"] },
    PartnerRow { id: "kp_4", name: "Quattroclima QV-LO09WAE/QN-LO09WAE", brand: "Quattroclima", series: "Lanterna", power: 2.5, price: 29_900, image: IMG_A, features: ["Инвертор", "Турбо режим", "Таймер 24ч"] },
];

const BREEZ: &[PartnerRow] = &[
    PartnerRow { id: "br_1", name: "Hisense AS-09HR4SYDDC15", brand: "Hisense", series: "Smart DC Inverter", power: 2.6, price: 44_900, image: IMG_B, features: ["Инвертор", "Wi-Fi", "Самодиагностика"] },
    PartnerRow { id: "br_2", name: "Royal Clima RC-V29HN", brand: "Royal Clima", series: "Vela", power: 2.7, price: 36_900, image: IMG_C, features: ["Инвертор", "Антибактериальный фильтр", "Авторестарт"] },
    PartnerRow { id: "br_3", name: "Funai RACI-SN25HP.D03", brand: "Funai", series: "Sensei", power: 2.5, price: 41_900, image: IMG_A, features: ["Инвертор", "Плазменный фильтр", "I Feel функция"] },
    PartnerRow { id: "br_4", name: "Zilon ZT-09IS", brand: "Zilon", series: "Inverter", power: 2.6, price: 33_900, image: IMG_B, features: ["Инвертор", "Ночной режим", "Холод/Тепло"] },
    PartnerRow { id: "br_5", name: "Hitachi RAK-18RPD/RAC-18WPD", brand: "Hitachi", series: "Performance", power: 5.0, price: 67_900, image: IMG_C, features: ["Инвертор", "Мощная система", "3D воздушный поток"] },
];

fn partner_feed(rows: &[PartnerRow], category: &str, source: &str) -> impl Iterator<Item = Product> {
    rows.iter().map(move |r| {
        Product::new(r.id, r.name, r.brand, WALL, r.price)
            .with_category(category)
            .with_series(r.series)
            .with_power(r.power)
            .with_image(r.image)
            .with_source(source)
            .with_features(r.features)
    })
}

pub fn partner_products() -> Vec<Product> {
    partner_feed(KLIMATPROF, "Инверторные сплит-системы", "klimatprof.online")
        .chain(partner_feed(BREEZ, "Кондиционеры", "breez.ru"))
        .collect()
}
