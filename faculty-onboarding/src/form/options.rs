//! Fixed option sets offered by the form's select and checkbox fields

use crate::choice_enum;

choice_enum! {
    /// Name prefix
    pub enum Prefix {
        Mr => "Mr",
        Mrs => "Mrs",
        Ms => "Ms",
        Dr => "Dr",
    }
}

choice_enum! {
    /// Gender of the faculty member
    pub enum Gender {
        Male => "Male",
        Female => "Female",
        Other => "Other",
    }
}

choice_enum! {
    pub enum Religion {
        Hindu => "Hindu",
        Muslim => "Muslim",
        Christian => "Christian",
        Sikh => "Sikh",
        Other => "Other",
    }
}

choice_enum! {
    pub enum Caste {
        Brahmins => "Brahmins",
        Thakur => "Thakur",
        Vaishya => "Vaishya",
        Tyagi => "Tyagi",
        Bhumihar => "Bhumihar",
        Muslims => "Muslims",
        Christians => "Christians",
        Rajput => "Rajput",
        Kayastha => "Kayastha",
        Pathans => "Pathans",
        MuslimMughals => "Muslim Mughals",
        MuslimShaikh => "Muslim Shaikh",
        MuslimSayyad => "Muslim Sayyad",
        JatSikh => "Jat Sikh",
        Bania => "Bania",
        PunjabiKhatri => "Punjabi Khatri",
        PunjabiArora => "Punjabi Arora",
        PunjabiSood => "Punjabi Sood",
        Baidya => "Baidya",
        Patidar => "Patidar",
        Patel => "Patel",
        Kshatriya => "Kshatriya",
        Reddy => "Reddy",
        Kamma => "Kamma",
        Kapu => "Kapu",
        GomatiBaniya => "Gomati Baniya",
        Velamma => "Velamma",
        KshatriyaRaju => "Kshatriya Raju",
        Iyengar => "Iyengar",
        Iyer => "Iyer",
        Vellalars => "Vellalars",
        Nair => "Nair",
        Naidu => "Naidu",
        Mukkulathor => "Mukkulathor",
        Sengunthar => "Sengunthar",
        Parkavakulam => "Parkavakulam",
        NagaratharBaniya => "Nagarathar Baniya",
        Komati => "Komati",
        Vokkaligas => "Vokkaligas",
        Lingayats => "Lingayats",
        Bunts => "Bunts",
    }
}

choice_enum! {
    /// Reservation category
    pub enum Category {
        General => "General",
        Obc => "OBC",
        Sc => "SC",
        St => "ST",
    }
}

choice_enum! {
    pub enum MotherTongue {
        Kannada => "Kannada",
        Malayalam => "Malayalam",
        Hindi => "Hindi",
        English => "English",
        Tamil => "Tamil",
        Telugu => "Telugu",
        Other => "Other",
    }
}

choice_enum! {
    /// Languages offered by the speak/read/write checkbox groups
    pub enum Language {
        English => "English",
        Hindi => "Hindi",
        Kannada => "Kannada",
        Malayalam => "Malayalam",
        Tamil => "Tamil",
        Telugu => "Telugu",
        Marathi => "Marathi",
        Gujarati => "Gujarati",
    }
}

choice_enum! {
    pub enum AccountType {
        Savings => "Savings",
        Current => "Current",
    }
}

choice_enum! {
    /// How an education programme was attended
    pub enum StudyMode {
        Direct => "Direct",
        Correspondence => "Correspondence",
    }
}

choice_enum! {
    /// Final result of an education programme
    pub enum PassClass {
        Distinction => "Distinction",
        First => "First",
        Second => "Second",
        Third => "Third",
        Fail => "Fail",
    }
}

choice_enum! {
    pub enum ChildGender {
        Male => "Male",
        Female => "Female",
        PreferNotToSay => "Prefer Not to Say",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_language_set_has_eight_members() {
        assert_eq!(Language::OPTIONS.len(), 8);
        assert_eq!(Language::ALL.len(), 8);
    }

    #[test]
    fn test_labels_with_spaces_parse() {
        assert_eq!(ChildGender::from_str("Prefer Not to Say").unwrap(), ChildGender::PreferNotToSay);
        assert_eq!(Caste::from_str("Muslim Mughals").unwrap(), Caste::MuslimMughals);
        assert_eq!(Category::Obc.as_str(), "OBC");
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        assert!(Prefix::from_str("Prof").is_err());
        assert!(PassClass::from_str("first").is_err());
        assert_eq!(PassClass::from_str("First").unwrap().as_str(), "First");
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&ChildGender::PreferNotToSay).unwrap();
        assert_eq!(json, "\"Prefer Not to Say\"");
    }
}
