use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::language::Language;

pub type TranslationTable = HashMap<Language, HashMap<&'static str, &'static str>>;

pub static TRANSLATIONS: Lazy<TranslationTable> = Lazy::new(|| {
    HashMap::from([
        (Language::En, EN.iter().copied().collect()),
        (Language::Ar, AR.iter().copied().collect()),
    ])
});

/// Looks `key` up for `language`. A missing entry returns the key itself so
/// untranslated strings stay visible instead of rendering blank.
pub fn translate(language: Language, key: &str) -> String {
    TRANSLATIONS
        .get(&language)
        .and_then(|table| table.get(key))
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

pub fn has_key(language: Language, key: &str) -> bool {
    TRANSLATIONS
        .get(&language)
        .map_or(false, |table| table.contains_key(key))
}

const EN: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.services", "Services"),
    ("nav.testimonials", "Clients"),
    ("nav.contact", "Contact"),
    ("nav.get_quote", "Get a Quote"),
    // Hero
    ("hero.title", "Freight that moves at the speed of your business"),
    ("hero.subtitle", "Ocean, air and road logistics across the Gulf and beyond, managed end to end by one team."),
    ("hero.cta_quote", "Request a Quote"),
    ("hero.cta_services", "Explore Services"),
    // About
    ("about.title", "About Meridian Freight"),
    ("about.body", "For more than two decades we have connected manufacturers, retailers and project owners with the markets they serve. Our network of carriers, warehouses and customs specialists keeps cargo moving on schedule."),
    ("about.mission_title", "Our Mission"),
    ("about.mission_body", "Make international shipping predictable, transparent and simple for every client, whatever the size of the load."),
    ("about.vision_title", "Our Vision"),
    ("about.vision_body", "To be the most trusted logistics partner linking the Middle East to the world."),
    // Services overview
    ("services.title", "Our Services"),
    ("services.subtitle", "Integrated solutions for every link in your supply chain."),
    ("services.learn_more", "Learn more"),
    ("service.ocean.title", "Ocean Freight"),
    ("service.ocean.summary", "FCL and LCL shipping on every major trade lane."),
    ("service.ocean.description", "We book space with leading carriers, consolidate smaller loads and track every container from origin port to final destination."),
    ("service.ocean.feature1", "Full and less-than-container loads"),
    ("service.ocean.feature2", "Weekly sailings on major lanes"),
    ("service.ocean.feature3", "Door-to-door container tracking"),
    ("service.air.title", "Air Freight"),
    ("service.air.summary", "Time-critical cargo delivered in days, not weeks."),
    ("service.air.description", "Express, consolidated and charter air services with priority handling at every hub."),
    ("service.air.feature1", "Next-flight-out express options"),
    ("service.air.feature2", "Dangerous goods certified handling"),
    ("service.air.feature3", "Charter solutions for oversized cargo"),
    ("service.road.title", "Road Transport"),
    ("service.road.summary", "Cross-border trucking across the GCC."),
    ("service.road.description", "A modern fleet of flatbeds, reefers and box trucks running scheduled and dedicated routes across the region."),
    ("service.road.feature1", "Full and part truckloads"),
    ("service.road.feature2", "Temperature-controlled trailers"),
    ("service.road.feature3", "Live GPS tracking"),
    ("service.warehousing.title", "Warehousing"),
    ("service.warehousing.summary", "Bonded and general storage close to major ports."),
    ("service.warehousing.description", "Secure facilities with inventory management, pick and pack, and value-added services for e-commerce and retail."),
    ("service.warehousing.feature1", "Bonded and free-zone storage"),
    ("service.warehousing.feature2", "Real-time inventory reporting"),
    ("service.warehousing.feature3", "Pick, pack and kitting"),
    ("service.customs.title", "Customs Clearance"),
    ("service.customs.summary", "Licensed brokers who keep your cargo compliant."),
    ("service.customs.description", "Documentation, tariff classification and duty management handled by specialists in every country we serve."),
    ("service.customs.feature1", "Import and export declarations"),
    ("service.customs.feature2", "HS code classification"),
    ("service.customs.feature3", "Duty and tax advisory"),
    ("service.project.title", "Project Cargo"),
    ("service.project.summary", "Heavy-lift and out-of-gauge logistics, engineered."),
    ("service.project.description", "Route surveys, lifting plans and multimodal execution for energy, construction and industrial projects."),
    ("service.project.feature1", "Route and site surveys"),
    ("service.project.feature2", "Heavy-lift and breakbulk shipping"),
    ("service.project.feature3", "On-site supervision"),
    // Stats
    ("stats.title", "Meridian in numbers"),
    ("stats.years", "Years of experience"),
    ("stats.shipments", "Shipments delivered"),
    ("stats.countries", "Countries served"),
    // Testimonials
    ("testimonials.title", "What our clients say"),
    ("testimonial.1.quote", "Meridian took over our inbound ocean freight and cut our transit delays in half within a quarter."),
    ("testimonial.1.author", "Sara Haddad"),
    ("testimonial.1.role", "Supply Chain Director, Retail Group"),
    ("testimonial.2.quote", "Their customs team cleared a complicated machinery shipment in two days. We will not use anyone else."),
    ("testimonial.2.author", "Omar Khalil"),
    ("testimonial.2.role", "Operations Manager, Industrial Contractor"),
    ("testimonial.3.quote", "Responsive, transparent and always on time. Our air shipments have never been easier."),
    ("testimonial.3.author", "Daniel Foster"),
    ("testimonial.3.role", "Procurement Lead, Medical Devices"),
    // Partners
    ("partners.title", "Trusted by carriers and shippers worldwide"),
    ("partners.subtitle", "We work alongside the industry's leading networks."),
    // Contact
    ("contact.title", "Get in touch"),
    ("contact.subtitle", "Tell us about your shipment and our team will reply within one business day."),
    ("contact.name", "Full name"),
    ("contact.email", "Email"),
    ("contact.company", "Company"),
    ("contact.phone", "Phone"),
    ("contact.service", "Service"),
    ("contact.service_placeholder", "Select a service"),
    ("contact.message", "Message"),
    ("contact.submit", "Send message"),
    ("contact.sending", "Sending..."),
    ("contact.success", "Thank you! Your message has been sent."),
    ("contact.error.name", "Please enter your name."),
    ("contact.error.email", "Please enter your email address."),
    ("contact.error.message", "Please enter a message."),
    ("contact.error.delivery", "Something went wrong sending your message. Please try again."),
    // Footer
    ("footer.tagline", "Reliable freight and logistics, from origin to destination."),
    ("footer.quick_links", "Quick links"),
    ("footer.rights", "All rights reserved."),
    // Service detail pages
    ("detail.back", "Back to services"),
    ("detail.features", "What's included"),
    ("detail.cta_title", "Ready to ship?"),
    ("detail.cta_body", "Our specialists will design a solution around your cargo, schedule and budget."),
    ("detail.cta_button", "Contact our team"),
    // Not found
    ("not_found.title", "Page not found"),
    ("not_found.body", "The page you are looking for has moved or never existed."),
    ("not_found.home", "Return home"),
];

const AR: &[(&str, &str)] = &[
    ("nav.home", "الرئيسية"),
    ("nav.about", "من نحن"),
    ("nav.services", "خدماتنا"),
    ("nav.testimonials", "عملاؤنا"),
    ("nav.contact", "اتصل بنا"),
    ("nav.get_quote", "اطلب عرض سعر"),
    ("hero.title", "شحن يواكب سرعة أعمالك"),
    ("hero.subtitle", "خدمات لوجستية بحرية وجوية وبرية في الخليج وخارجه، يديرها فريق واحد من البداية إلى النهاية."),
    ("hero.cta_quote", "اطلب عرض سعر"),
    ("hero.cta_services", "استكشف خدماتنا"),
    ("about.title", "عن ميريديان للشحن"),
    ("about.body", "منذ أكثر من عقدين نربط المصنعين وتجار التجزئة وأصحاب المشاريع بالأسواق التي يخدمونها. تحافظ شبكتنا من الناقلين والمستودعات وخبراء التخليص الجمركي على حركة البضائع في موعدها."),
    ("about.mission_title", "مهمتنا"),
    ("about.mission_body", "أن نجعل الشحن الدولي واضحاً وشفافاً وبسيطاً لكل عميل مهما كان حجم الشحنة."),
    ("about.vision_title", "رؤيتنا"),
    ("about.vision_body", "أن نكون الشريك اللوجستي الأكثر ثقة في ربط الشرق الأوسط بالعالم."),
    ("services.title", "خدماتنا"),
    ("services.subtitle", "حلول متكاملة لكل حلقة في سلسلة التوريد الخاصة بك."),
    ("services.learn_more", "اعرف المزيد"),
    ("service.ocean.title", "الشحن البحري"),
    ("service.ocean.summary", "شحن الحاويات الكاملة والجزئية على جميع الخطوط الرئيسية."),
    ("service.ocean.description", "نحجز المساحات لدى كبرى شركات الملاحة، ونجمع الشحنات الصغيرة، ونتتبع كل حاوية من ميناء المنشأ حتى الوجهة النهائية."),
    ("service.ocean.feature1", "حاويات كاملة وشحنات جزئية"),
    ("service.ocean.feature2", "رحلات أسبوعية على الخطوط الرئيسية"),
    ("service.ocean.feature3", "تتبع الحاويات من الباب إلى الباب"),
    ("service.air.title", "الشحن الجوي"),
    ("service.air.summary", "شحنات عاجلة تصل خلال أيام لا أسابيع."),
    ("service.air.description", "خدمات شحن جوي سريعة ومجمعة ومستأجرة مع مناولة ذات أولوية في كل مطار."),
    ("service.air.feature1", "خيارات الشحن على أول رحلة متاحة"),
    ("service.air.feature2", "مناولة معتمدة للبضائع الخطرة"),
    ("service.air.feature3", "طائرات مستأجرة للشحنات الكبيرة"),
    ("service.road.title", "النقل البري"),
    ("service.road.summary", "نقل بالشاحنات عبر حدود دول الخليج."),
    ("service.road.description", "أسطول حديث من الشاحنات المسطحة والمبردة والمغلقة يعمل على مسارات منتظمة ومخصصة في المنطقة."),
    ("service.road.feature1", "حمولات كاملة وجزئية"),
    ("service.road.feature2", "مقطورات مبردة"),
    ("service.road.feature3", "تتبع مباشر عبر GPS"),
    ("service.warehousing.title", "التخزين"),
    ("service.warehousing.summary", "مستودعات عامة وجمركية بالقرب من الموانئ الرئيسية."),
    ("service.warehousing.description", "منشآت آمنة مع إدارة المخزون وخدمات التجهيز والتغليف والخدمات المضافة للتجارة الإلكترونية والتجزئة."),
    ("service.warehousing.feature1", "تخزين جمركي وفي المناطق الحرة"),
    ("service.warehousing.feature2", "تقارير مخزون لحظية"),
    ("service.warehousing.feature3", "تجهيز وتغليف الطلبات"),
    ("service.customs.title", "التخليص الجمركي"),
    ("service.customs.summary", "مخلصون مرخصون يضمنون امتثال شحناتك."),
    ("service.customs.description", "إعداد المستندات وتصنيف التعريفة وإدارة الرسوم على يد مختصين في كل دولة نخدمها."),
    ("service.customs.feature1", "بيانات الاستيراد والتصدير"),
    ("service.customs.feature2", "تصنيف رموز النظام المنسق"),
    ("service.customs.feature3", "استشارات الرسوم والضرائب"),
    ("service.project.title", "شحن المشاريع"),
    ("service.project.summary", "لوجستيات الحمولات الثقيلة وغير القياسية بدقة هندسية."),
    ("service.project.description", "مسح المسارات وخطط الرفع والتنفيذ متعدد الوسائط لمشاريع الطاقة والبناء والصناعة."),
    ("service.project.feature1", "مسح المسارات والمواقع"),
    ("service.project.feature2", "شحن الحمولات الثقيلة والبضائع السائبة"),
    ("service.project.feature3", "إشراف ميداني"),
    ("stats.title", "ميريديان بالأرقام"),
    ("stats.years", "سنوات الخبرة"),
    ("stats.shipments", "شحنة تم تسليمها"),
    ("stats.countries", "دولة نخدمها"),
    ("testimonials.title", "ماذا يقول عملاؤنا"),
    ("testimonial.1.quote", "تولت ميريديان شحناتنا البحرية الواردة وخفضت التأخير إلى النصف خلال ربع سنة."),
    ("testimonial.1.author", "سارة حداد"),
    ("testimonial.1.role", "مديرة سلسلة التوريد، مجموعة تجزئة"),
    ("testimonial.2.quote", "أنهى فريق التخليص شحنة معدات معقدة خلال يومين. لن نتعامل مع غيرهم."),
    ("testimonial.2.author", "عمر خليل"),
    ("testimonial.2.role", "مدير العمليات، مقاول صناعي"),
    ("testimonial.3.quote", "سرعة استجابة وشفافية والتزام دائم بالمواعيد. لم تكن شحناتنا الجوية أسهل من قبل."),
    ("testimonial.3.author", "دانيال فوستر"),
    ("testimonial.3.role", "مسؤول المشتريات، أجهزة طبية"),
    ("partners.title", "موثوقون لدى الناقلين والشاحنين حول العالم"),
    ("partners.subtitle", "نعمل جنباً إلى جنب مع أبرز الشبكات في القطاع."),
    ("contact.title", "تواصل معنا"),
    ("contact.subtitle", "أخبرنا عن شحنتك وسيرد فريقنا خلال يوم عمل واحد."),
    ("contact.name", "الاسم الكامل"),
    ("contact.email", "البريد الإلكتروني"),
    ("contact.company", "الشركة"),
    ("contact.phone", "الهاتف"),
    ("contact.service", "الخدمة"),
    ("contact.service_placeholder", "اختر خدمة"),
    ("contact.message", "الرسالة"),
    ("contact.submit", "إرسال الرسالة"),
    ("contact.sending", "جارٍ الإرسال..."),
    ("contact.success", "شكراً لك! تم إرسال رسالتك."),
    ("contact.error.name", "يرجى إدخال اسمك."),
    ("contact.error.email", "يرجى إدخال بريدك الإلكتروني."),
    ("contact.error.message", "يرجى كتابة رسالتك."),
    ("contact.error.delivery", "حدث خطأ أثناء إرسال رسالتك. يرجى المحاولة مرة أخرى."),
    ("footer.tagline", "شحن وخدمات لوجستية موثوقة من المنشأ إلى الوجهة."),
    ("footer.quick_links", "روابط سريعة"),
    ("footer.rights", "جميع الحقوق محفوظة."),
    ("detail.back", "العودة إلى الخدمات"),
    ("detail.features", "ما تتضمنه الخدمة"),
    ("detail.cta_title", "هل أنت مستعد للشحن؟"),
    ("detail.cta_body", "سيصمم خبراؤنا حلاً يناسب شحنتك وجدولك وميزانيتك."),
    ("detail.cta_button", "تواصل مع فريقنا"),
    ("not_found.title", "الصفحة غير موجودة"),
    ("not_found.body", "الصفحة التي تبحث عنها نُقلت أو لم تكن موجودة."),
    ("not_found.home", "العودة إلى الرئيسية"),
];
