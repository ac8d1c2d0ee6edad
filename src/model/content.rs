// Static agency content: team bios, testimonials, staging comparisons

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub email: Option<&'static str>,
    pub socials: &'static [SocialLink],
    pub bio: &'static str,
}

pub struct Testimonial {
    pub title: &'static str,
    pub text: &'static str,
}

pub struct StagingComparison {
    pub title: &'static str,
    pub before: &'static str,
    pub after: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Kayode Adekoya",
        title: "KM&co Realty",
        image: "images/team member male 1.jpeg",
        email: Some("kay21real@gmail.com"),
        socials: &[
            SocialLink { label: "Instagram", href: "https://www.instagram.com/kadekoya/?hl=en" },
            SocialLink { label: "Facebook", href: "https://www.facebook.com/kayode.adekoya.75/" },
        ],
        bio: "Kayode Adekoya is an award-winning real estate professional dedicated to helping \
              clients confidently buy, sell, and lease property. With a background in finance and \
              early exposure to construction and development, he brings strong market insight \
              and analytical skills to every transaction.",
    },
    TeamMember {
        name: "Muniba Mian",
        title: "Real Estate Agent",
        image: "images/team member female 2.jpg",
        email: None,
        socials: &[
            SocialLink { label: "Facebook", href: "https://www.facebook.com/dealzinheelz.ca/" },
            SocialLink { label: "Instagram", href: "https://www.instagram.com/dealzinheelz.realestate" },
            SocialLink { label: "TikTok", href: "https://www.tiktok.com/@dealzinheelz.realestate" },
        ],
        bio: "I work with first-time home buyers, investors, renters, and sellers across the \
              Greater Toronto Area, with a strong focus on the Durham Region. Clear guidance, \
              honest conversations, and practical strategy. No jargon. No pressure.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        title: "Down to Earth & Stress Free",
        text: "Don was the listing agent for our home. He stayed in contact from the day our home \
               was listed to the day it closed, and made the whole transaction stress free.",
    },
    Testimonial {
        title: "Very Helpful and Kind",
        text: "Don was very helpful when selling our home. He explained the process and was kind, \
               patient, and polite. He went out of his way to make this sale happen quickly.",
    },
    Testimonial {
        title: "Highly Recommend Don!",
        text: "Very dedicated to finding us our home. Very patient with great advice. If we need \
               realtor services in the future, we will definitely contact Don again.",
    },
    Testimonial {
        title: "Exceptional Service",
        text: "Would not have purchased my home from anyone other than Don. He is very \
               knowledgeable and helpful. Highly recommend his services in real estate.",
    },
];

pub const STAGING: &[StagingComparison] = &[StagingComparison {
    title: "Elegant Living Room Transformation",
    before: "images/Living Room.jpeg",
    after: "images/living room after.jpeg",
}];

pub const AGENCY_SOCIALS: &[SocialLink] = &[
    SocialLink { label: "TikTok", href: "https://www.tiktok.com/@dealzinheelz.realestate" },
    SocialLink { label: "Facebook", href: "https://www.facebook.com/dealzinheelz.ca/" },
    SocialLink { label: "Instagram", href: "https://www.instagram.com/dealzinheelz.realestate" },
];
