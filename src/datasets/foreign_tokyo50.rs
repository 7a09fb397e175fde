use _model::Record;

/// Foreign companies with a Tokyo office, largest first.
///
/// Where the Japanese arm trades under another name (Google, MSD, P&G) the
/// query uses that name.
pub static RECORDS: &[Record<'static>] = &[
    Record::new("Apple", "Apple 東京オフィス"),
    Record::new("Microsoft", "Microsoft 東京オフィス"),
    Record::new("Nvidia", "Nvidia 東京オフィス"),
    Record::new("Amazon", "Amazon 東京オフィス"),
    Record::new("Meta Platforms", "Meta 東京オフィス"),
    Record::new("Alphabet", "Google 東京オフィス"),
    Record::new("Broadcom", "Broadcom 東京オフィス"),
    Record::new("Tesla", "Tesla 東京オフィス"),
    Record::new("Oracle", "Oracle 東京オフィス"),
    Record::new("Salesforce", "Salesforce 東京オフィス"),
    Record::new("Adobe", "Adobe 東京オフィス"),
    Record::new("Cisco", "Cisco 東京オフィス"),
    Record::new("Intel", "Intel 東京オフィス"),
    Record::new("IBM", "IBM 東京オフィス"),
    Record::new("Qualcomm", "Qualcomm 東京オフィス"),
    Record::new("AMD", "AMD 東京オフィス"),
    Record::new("ServiceNow", "ServiceNow 東京オフィス"),
    Record::new("JPMorgan Chase", "JPMorgan Chase 東京オフィス"),
    Record::new("Goldman Sachs", "Goldman Sachs 東京オフィス"),
    Record::new("Morgan Stanley", "Morgan Stanley 東京オフィス"),
    Record::new("Citigroup", "Citigroup 東京オフィス"),
    Record::new("Bank of America", "Bank of America 東京オフィス"),
    Record::new("Visa", "Visa 東京オフィス"),
    Record::new("Mastercard", "Mastercard 東京オフィス"),
    Record::new("American Express", "American Express 東京オフィス"),
    Record::new("BlackRock", "BlackRock 東京オフィス"),
    Record::new("Accenture", "Accenture 東京オフィス"),
    Record::new("Netflix", "Netflix 東京オフィス"),
    Record::new("Uber", "Uber 東京オフィス"),
    Record::new("PayPal", "PayPal 東京オフィス"),
    Record::new("Airbnb", "Airbnb 東京オフィス"),
    Record::new("Johnson & Johnson", "Johnson & Johnson 東京オフィス"),
    Record::new("Pfizer", "Pfizer 東京オフィス"),
    Record::new("Merck", "MSD 東京オフィス"),
    Record::new("Eli Lilly", "Eli Lilly 東京オフィス"),
    Record::new("AbbVie", "AbbVie 東京オフィス"),
    Record::new("Abbott Laboratories", "Abbott 東京オフィス"),
    Record::new("Thermo Fisher Scientific", "Thermo Fisher Scientific 東京オフィス"),
    Record::new("Procter & Gamble", "P&G 東京オフィス"),
    Record::new("Coca-Cola", "Coca-Cola 東京オフィス"),
    Record::new("PepsiCo", "PepsiCo 東京オフィス"),
    Record::new("Nike", "Nike 東京オフィス"),
    Record::new("Starbucks", "Starbucks 東京オフィス"),
    Record::new("McDonald's", "McDonald's 東京オフィス"),
    Record::new("Caterpillar", "Caterpillar 東京オフィス"),
    Record::new("Boeing", "Boeing 東京オフィス"),
    Record::new("3M", "3M 東京オフィス"),
    Record::new("Honeywell", "Honeywell 東京オフィス"),
    Record::new("ExxonMobil", "ExxonMobil 東京オフィス"),
    Record::new("Chevron", "Chevron 東京オフィス"),
];
