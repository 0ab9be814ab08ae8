//! Built-in administrative taxonomy
//!
//! Region → sub-region → districts as used by the field programme. Order is
//! significant: it is the catalog walk order used by the directory builder.

pub(crate) const BUILTIN_TAXONOMY: &[(&str, &[(&str, &[&str])])] = &[
    (
        "Northern",
        &[
            (
                "Acholi",
                &[
                    "Agago", "Amuru", "Gulu", "Kitgum", "Lamwo", "Nwoya", "Omoro", "Pader",
                ],
            ),
            (
                "Lango",
                &[
                    "Alebtong", "Amolatar", "Apac", "Dokolo", "Kole", "Kwania", "Lira", "Otuke",
                    "Oyam",
                ],
            ),
            (
                "West Nile",
                &[
                    "Adjumani",
                    "Arua",
                    "Koboko",
                    "Madi-Okollo",
                    "Maracha",
                    "Moyo",
                    "Nebbi",
                    "Obongi",
                    "Pakwach",
                    "Terego",
                    "Yumbe",
                    "Zombo",
                ],
            ),
            (
                "Karamoja",
                &[
                    "Abim",
                    "Amudat",
                    "Kaabong",
                    "Karenga",
                    "Kotido",
                    "Moroto",
                    "Nabilatuk",
                    "Nakapiripirit",
                    "Napak",
                ],
            ),
        ],
    ),
    (
        "Eastern",
        &[
            (
                "Busoga",
                &[
                    "Bugiri",
                    "Bugweri",
                    "Buyende",
                    "Iganga",
                    "Jinja",
                    "Kaliro",
                    "Kamuli",
                    "Luuka",
                    "Mayuge",
                    "Namayingo",
                    "Namutumba",
                ],
            ),
            (
                "Bukedi",
                &[
                    "Budaka", "Busia", "Butaleja", "Butebo", "Kibuku", "Pallisa", "Tororo",
                ],
            ),
            (
                "Elgon",
                &[
                    "Bududa",
                    "Bukwo",
                    "Bulambuli",
                    "Kapchorwa",
                    "Kween",
                    "Manafwa",
                    "Mbale",
                    "Namisindwa",
                    "Sironko",
                ],
            ),
            (
                "Teso",
                &[
                    "Amuria",
                    "Bukedea",
                    "Kaberamaido",
                    "Kalaki",
                    "Kapelebyong",
                    "Katakwi",
                    "Kumi",
                    "Ngora",
                    "Serere",
                    "Soroti",
                ],
            ),
        ],
    ),
    (
        "Central",
        &[
            (
                "North Buganda",
                &[
                    "Kassanda",
                    "Kayunga",
                    "Kiboga",
                    "Kyankwanzi",
                    "Luwero",
                    "Mityana",
                    "Mubende",
                    "Nakaseke",
                    "Nakasongola",
                ],
            ),
            (
                "South Buganda",
                &[
                    "Buikwe",
                    "Bukomansimbi",
                    "Butambala",
                    "Buvuma",
                    "Gomba",
                    "Kalangala",
                    "Kalungu",
                    "Kampala",
                    "Kyotera",
                    "Lwengo",
                    "Lyantonde",
                    "Masaka",
                    "Mpigi",
                    "Mukono",
                    "Rakai",
                    "Sembabule",
                    "Wakiso",
                ],
            ),
        ],
    ),
    (
        "Western",
        &[
            (
                "Ankole",
                &[
                    "Buhweju", "Bushenyi", "Ibanda", "Isingiro", "Kazo", "Kiruhura", "Mbarara",
                    "Mitooma", "Ntungamo", "Rubirizi", "Rwampara", "Sheema",
                ],
            ),
            (
                "Kigezi",
                &[
                    "Kabale", "Kanungu", "Kisoro", "Rubanda", "Rukiga", "Rukungiri",
                ],
            ),
            (
                "Bunyoro",
                &[
                    "Buliisa",
                    "Hoima",
                    "Kagadi",
                    "Kakumiro",
                    "Kibaale",
                    "Kikuube",
                    "Kiryandongo",
                    "Masindi",
                ],
            ),
            (
                "Tooro",
                &[
                    "Bundibugyo",
                    "Bunyangabu",
                    "Kabarole",
                    "Kamwenge",
                    "Kasese",
                    "Kitagwenda",
                    "Kyegegwa",
                    "Kyenjojo",
                    "Ntoroko",
                ],
            ),
        ],
    ),
];
