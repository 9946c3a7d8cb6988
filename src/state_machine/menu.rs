//! Menu text rendered to the handset

pub const ENTRY_MENU: &str = "Welcome to USSD WhoIs

1. Check for domain
2. About
";

pub const CHECK_FOR_DOMAIN_PROMPT: &str = "Check for domain

Enter the name of a domain. e.g. mywebsite.com
";

pub const ABOUT_SERVICE: &str = "This service is brought to you by Payrope and NNDI, who specialize in developing SMS, USSD and Web applications.

Find us online: https://payrope.com  https://nndi-tech.com
";

pub fn domain_available(domain: &str) -> String {
    format!(
        "The domain {domain} is available.\nPurchase now before someone else gets their hands on it.\n"
    )
}

pub fn domain_registered(domain: &str, owner: &str, changed: &str, name_servers: &str) -> String {
    format!(
        "{domain} is already registered.\n\nOwner: {owner}\nUpdated: {changed}\nName Servers: {name_servers}\n"
    )
}

pub fn unrecognized_input(input: &str) -> String {
    format!("Failed to process {input}")
}
