//! Static country and continent tables, keyed by upper-case two-letter code.

pub(crate) const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("AD", "Andorra"), ("AL", "Albania"), ("AM", "Armenia"), ("AT", "Austria"),
    ("AX", "Åland Islands"), ("BA", "Bosnia and Herzegovina"), ("BE", "Belgium"),
    ("BG", "Bulgaria"), ("BY", "Belarus"), ("CH", "Switzerland"), ("CY", "Cyprus"),
    ("CZ", "Czech Republic"), ("DE", "Germany"), ("DK", "Denmark"), ("EE", "Estonia"),
    ("ES", "Spain"), ("FI", "Finland"), ("FO", "Faroe Islands"), ("FR", "France"),
    ("GB", "United Kingdom"), ("UK", "United Kingdom"), ("GE", "Georgia"), ("GG", "Guernsey"),
    ("GI", "Gibraltar"), ("GR", "Greece"), ("HR", "Croatia"), ("HU", "Hungary"),
    ("IE", "Ireland"), ("IM", "Isle of Man"), ("IS", "Iceland"), ("IT", "Italy"),
    ("JE", "Jersey"), ("LI", "Liechtenstein"), ("LT", "Lithuania"), ("LU", "Luxembourg"),
    ("LV", "Latvia"), ("MC", "Monaco"), ("MD", "Moldova"), ("ME", "Montenegro"),
    ("MK", "North Macedonia"), ("MT", "Malta"), ("NL", "Netherlands"), ("NO", "Norway"),
    ("PL", "Poland"), ("PT", "Portugal"), ("RO", "Romania"), ("RS", "Serbia"), ("RU", "Russia"),
    ("SE", "Sweden"), ("SI", "Slovenia"), ("SJ", "Svalbard and Jan Mayen"), ("SK", "Slovakia"),
    ("SM", "San Marino"), ("UA", "Ukraine"), ("VA", "Vatican City"), ("XK", "Kosovo"),
    ("AE", "United Arab Emirates"), ("AF", "Afghanistan"), ("AZ", "Azerbaijan"),
    ("BD", "Bangladesh"), ("BH", "Bahrain"), ("BN", "Brunei"), ("BT", "Bhutan"),
    ("CN", "China"), ("HK", "Hong Kong"), ("ID", "Indonesia"), ("IL", "Israel"),
    ("IN", "India"), ("IQ", "Iraq"), ("IR", "Iran"), ("JO", "Jordan"), ("JP", "Japan"),
    ("KG", "Kyrgyzstan"), ("KH", "Cambodia"), ("KP", "North Korea"), ("KR", "South Korea"),
    ("KW", "Kuwait"), ("KZ", "Kazakhstan"), ("LA", "Laos"), ("LB", "Lebanon"),
    ("LK", "Sri Lanka"), ("MM", "Myanmar"), ("MN", "Mongolia"), ("MO", "Macau"),
    ("MV", "Maldives"), ("MY", "Malaysia"), ("NP", "Nepal"), ("OM", "Oman"),
    ("PH", "Philippines"), ("PK", "Pakistan"), ("PS", "Palestine"), ("QA", "Qatar"),
    ("SA", "Saudi Arabia"), ("SG", "Singapore"), ("SY", "Syria"), ("TH", "Thailand"),
    ("TJ", "Tajikistan"), ("TL", "Timor-Leste"), ("TM", "Turkmenistan"), ("TR", "Turkey"),
    ("TW", "Taiwan"), ("UZ", "Uzbekistan"), ("VN", "Vietnam"), ("YE", "Yemen"),
    ("AO", "Angola"), ("BF", "Burkina Faso"), ("BI", "Burundi"), ("BJ", "Benin"),
    ("BW", "Botswana"), ("CD", "Democratic Republic of the Congo"),
    ("CF", "Central African Republic"), ("CG", "Republic of the Congo"), ("CI", "Ivory Coast"),
    ("CM", "Cameroon"), ("CV", "Cape Verde"), ("DJ", "Djibouti"), ("DZ", "Algeria"),
    ("EG", "Egypt"), ("EH", "Western Sahara"), ("ER", "Eritrea"), ("ET", "Ethiopia"),
    ("GA", "Gabon"), ("GH", "Ghana"), ("GM", "Gambia"), ("GN", "Guinea"),
    ("GQ", "Equatorial Guinea"), ("GW", "Guinea-Bissau"), ("KE", "Kenya"), ("KM", "Comoros"),
    ("LR", "Liberia"), ("LS", "Lesotho"), ("LY", "Libya"), ("MA", "Morocco"),
    ("MG", "Madagascar"), ("ML", "Mali"), ("MR", "Mauritania"), ("MU", "Mauritius"),
    ("MW", "Malawi"), ("MZ", "Mozambique"), ("NA", "Namibia"), ("NE", "Niger"),
    ("NG", "Nigeria"), ("RE", "Réunion"), ("RW", "Rwanda"), ("SC", "Seychelles"),
    ("SD", "Sudan"), ("SL", "Sierra Leone"), ("SN", "Senegal"), ("SO", "Somalia"),
    ("SS", "South Sudan"), ("ST", "São Tomé and Príncipe"), ("SZ", "Eswatini"), ("TD", "Chad"),
    ("TG", "Togo"), ("TN", "Tunisia"), ("TZ", "Tanzania"), ("UG", "Uganda"), ("YT", "Mayotte"),
    ("ZA", "South Africa"), ("ZM", "Zambia"), ("ZW", "Zimbabwe"), ("AG", "Antigua and Barbuda"),
    ("AI", "Anguilla"), ("AW", "Aruba"), ("BB", "Barbados"), ("BL", "Saint Barthélemy"),
    ("BM", "Bermuda"), ("BQ", "Caribbean Netherlands"), ("BS", "Bahamas"), ("BZ", "Belize"),
    ("CA", "Canada"), ("CR", "Costa Rica"), ("CU", "Cuba"), ("CW", "Curaçao"),
    ("DM", "Dominica"), ("DO", "Dominican Republic"), ("GD", "Grenada"), ("GL", "Greenland"),
    ("GP", "Guadeloupe"), ("GT", "Guatemala"), ("HN", "Honduras"), ("HT", "Haiti"),
    ("JM", "Jamaica"), ("KN", "Saint Kitts and Nevis"), ("KY", "Cayman Islands"),
    ("LC", "Saint Lucia"), ("MF", "Saint Martin"), ("MQ", "Martinique"), ("MS", "Montserrat"),
    ("MX", "Mexico"), ("NI", "Nicaragua"), ("PA", "Panama"),
    ("PM", "Saint Pierre and Miquelon"), ("PR", "Puerto Rico"), ("SV", "El Salvador"),
    ("SX", "Sint Maarten"), ("TC", "Turks and Caicos Islands"), ("TT", "Trinidad and Tobago"),
    ("US", "United States"), ("VC", "Saint Vincent and the Grenadines"),
    ("VG", "British Virgin Islands"), ("VI", "U.S. Virgin Islands"), ("AR", "Argentina"),
    ("BO", "Bolivia"), ("BR", "Brazil"), ("CL", "Chile"), ("CO", "Colombia"), ("EC", "Ecuador"),
    ("FK", "Falkland Islands"), ("GF", "French Guiana"), ("GY", "Guyana"), ("PE", "Peru"),
    ("PY", "Paraguay"), ("SR", "Suriname"), ("UY", "Uruguay"), ("VE", "Venezuela"),
    ("AS", "American Samoa"), ("AU", "Australia"), ("CK", "Cook Islands"), ("FJ", "Fiji"),
    ("FM", "Micronesia"), ("GU", "Guam"), ("KI", "Kiribati"), ("MH", "Marshall Islands"),
    ("MP", "Northern Mariana Islands"), ("NC", "New Caledonia"), ("NF", "Norfolk Island"),
    ("NR", "Nauru"), ("NU", "Niue"), ("NZ", "New Zealand"), ("PF", "French Polynesia"),
    ("PG", "Papua New Guinea"), ("PN", "Pitcairn Islands"), ("PW", "Palau"),
    ("SB", "Solomon Islands"), ("TK", "Tokelau"), ("TO", "Tonga"), ("TV", "Tuvalu"),
    ("UM", "U.S. Minor Outlying Islands"), ("VU", "Vanuatu"), ("WF", "Wallis and Futuna"),
    ("WS", "Samoa"),
];

pub(crate) const EUROPE: &[&str] = &[
    "AD", "AL", "AT", "AX", "BA", "BE", "BG", "BY", "CH", "CY", "CZ", "DE", "DK", "EE", "ES",
    "FI", "FO", "FR", "GB", "UK", "GG", "GI", "GR", "HR", "HU", "IE", "IM", "IS", "IT", "JE",
    "LI", "LT", "LU", "LV", "MC", "MD", "ME", "MK", "MT", "NL", "NO", "PL", "PT", "RO", "RS",
    "SE", "SI", "SJ", "SK", "SM", "UA", "VA", "XK",
];

pub(crate) const ASIA: &[&str] = &[
    "AE", "AF", "AM", "AZ", "BD", "BH", "BN", "BT", "CN", "GE", "HK", "ID", "IL", "IN", "IQ",
    "IR", "JO", "JP", "KG", "KH", "KP", "KR", "KW", "KZ", "LA", "LB", "LK", "MM", "MN", "MO",
    "MV", "MY", "NP", "OM", "PH", "PK", "PS", "QA", "SA", "SG", "SY", "TH", "TJ", "TL", "TM",
    "TR", "TW", "UZ", "VN", "YE",
];

pub(crate) const AFRICA: &[&str] = &[
    "AO", "BF", "BI", "BJ", "BW", "CD", "CF", "CG", "CI", "CM", "CV", "DJ", "DZ", "EG", "EH",
    "ER", "ET", "GA", "GH", "GM", "GN", "GQ", "GW", "KE", "KM", "LR", "LS", "LY", "MA", "MG",
    "ML", "MR", "MU", "MW", "MZ", "NA", "NE", "NG", "RE", "RW", "SC", "SD", "SL", "SN", "SO",
    "SS", "ST", "SZ", "TD", "TG", "TN", "TZ", "UG", "YT", "ZA", "ZM", "ZW",
];

pub(crate) const NORTH_AMERICA: &[&str] = &[
    "AG", "AI", "AW", "BB", "BL", "BM", "BQ", "BS", "BZ", "CA", "CR", "CU", "CW", "DM", "DO",
    "GD", "GL", "GP", "GT", "HN", "HT", "JM", "KN", "KY", "LC", "MF", "MQ", "MS", "MX", "NI",
    "PA", "PM", "PR", "SV", "SX", "TC", "TT", "US", "VC", "VG", "VI",
];

pub(crate) const SOUTH_AMERICA: &[&str] = &[
    "AR", "BO", "BR", "CL", "CO", "EC", "FK", "GF", "GY", "PE", "PY", "SR", "UY", "VE",
];

pub(crate) const OCEANIA: &[&str] = &[
    "AS", "AU", "CK", "FJ", "FM", "GU", "KI", "MH", "MP", "NC", "NF", "NR", "NU", "NZ", "PF",
    "PG", "PN", "PW", "SB", "TK", "TO", "TV", "UM", "VU", "WF", "WS",
];
