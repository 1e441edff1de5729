//! The static content table for the Santaan AI EMR marketing deck.
//!
//! All slide text is literal and fixed: twelve records consumed by a single
//! generic append routine. Some lines intentionally carry trailing spaces and
//! decorative symbols; they are part of the deck content.

use crate::types::{Deck, Slide, SlideLayout, TextStyle};

/// Deck name, used for the document title property.
pub const DECK_NAME: &str = "Santaan AI EMR";

/// Default output directory, relative to the working directory.
pub const OUTPUT_DIR: &str = "presentation";

/// Output filename within [`OUTPUT_DIR`].
pub const OUTPUT_FILENAME: &str = "Santaan_AI_EMR_Presentation.pptx";

/// Healthcare blue theme palette.
pub mod palette {
    use crate::types::Color;

    /// Blue-500.
    pub const PRIMARY_BLUE: Color = Color::new(59, 130, 246);
    /// Green-500.
    pub const SECONDARY_GREEN: Color = Color::new(16, 185, 129);
    /// Yellow-500.
    pub const ACCENT_YELLOW: Color = Color::new(245, 158, 11);
    /// Gray-800.
    pub const TEXT_GRAY: Color = Color::new(31, 41, 55);
}

/// One slide's worth of literal content.
#[derive(Debug, Clone, Copy)]
pub struct SlideRecord {
    pub layout: SlideLayout,
    pub title: &'static str,
    pub body: &'static str,
    pub title_style: TextStyle,
    pub body_style: TextStyle,
}

impl SlideRecord {
    /// Materialize this record as an owned [`Slide`].
    pub fn to_slide(&self) -> Slide {
        Slide::new(self.layout, self.title, self.body)
            .with_title_style(self.title_style)
            .with_body_style(self.body_style)
    }
}

/// Build the full marketing deck from the content table.
pub fn build_deck() -> Deck {
    let mut deck = Deck::new(DECK_NAME);
    for record in &SLIDES {
        deck.add_slide(record.to_slide());
    }
    log::debug!(
        "Built deck '{}' with {} slides",
        deck.name,
        deck.slide_count()
    );
    deck
}

const OPENING_TITLE: TextStyle = TextStyle::sized_colored(44, palette::PRIMARY_BLUE);
const CLOSING_TITLE: TextStyle = TextStyle::sized_colored(36, palette::PRIMARY_BLUE);
const OPENING_SUBTITLE: TextStyle = TextStyle::sized(18);
const CLOSING_SUBTITLE: TextStyle = TextStyle::sized(16);

/// The twelve slides, in presentation order.
pub const SLIDES: [SlideRecord; 12] = [
    // Slide 1: Title
    SlideRecord {
        layout: SlideLayout::Title,
        title: "Santaan AI EMR",
        body: "Complete IVF Electronic Medical Records System\nAdvanced Healthcare Technology for Modern Fertility Clinics\n\n🏥 Multi-clinic Management\n🤖 AI-Powered Optimization\n🔍 Real-time Health Monitoring\n📊 Enterprise Scalability\n\nDemo: santaanaimr.netlify.app",
        title_style: OPENING_TITLE,
        body_style: OPENING_SUBTITLE,
    },
    // Slide 2: Executive Summary
    SlideRecord {
        layout: SlideLayout::Content,
        title: "🎯 Complete Healthcare Solution",
        body: r#"What is Santaan AI EMR?
A comprehensive, cloud-based Electronic Medical Records system specifically designed for IVF and fertility clinics with advanced AI capabilities and enterprise-grade monitoring.

Key Value Propositions:
✅ Complete IVF Workflow Management - From consultation to pregnancy
✅ AI-Powered Treatment Optimization - Intelligent recommendations  
✅ Multi-Clinic Scalability - 1 to 100+ clinic support
✅ Proactive System Monitoring - Zero downtime guarantee
✅ Regulatory Compliance - HIPAA, ART Act 2021, DPDP Act 2023"#,
        title_style: TextStyle::NONE,
        body_style: TextStyle::NONE,
    },
    // Slide 3: Market Problem
    SlideRecord {
        layout: SlideLayout::Content,
        title: "🚨 Current Healthcare Technology Challenges",
        body: r#"IVF Clinic Pain Points:
📋 Manual record keeping - Paper-based, error-prone systems
🔄 Fragmented workflows - Multiple disconnected systems  
📊 Limited analytics - No data-driven insights
🏥 Single-clinic solutions - Cannot scale across locations
⚠️ System failures - Unexpected downtime, data loss

Financial Impact:
• Lost revenue from system downtime
• Compliance penalties from poor record keeping
• Inefficient operations from manual processes
• Limited growth due to technology constraints"#,
        title_style: TextStyle::NONE,
        body_style: TextStyle::NONE,
    },
    // Slide 4: Our Solution
    SlideRecord {
        layout: SlideLayout::Content,
        title: "🚀 Santaan AI EMR - Complete Solution",
        body: r#"🏥 Clinical Management
• Complete patient lifecycle tracking
• Treatment protocol management
• Laboratory integration
• Quality metrics dashboard

🤖 AI-Powered Intelligence  
• Treatment success prediction
• Personalized protocol recommendations
• Risk assessment algorithms
• Outcome optimization

📊 Business Intelligence
• Real-time analytics dashboard
• KPI tracking and reporting
• Resource optimization
• Financial performance metrics

🔍 System Health Monitoring
• Proactive limit monitoring
• Automated scaling alerts
• Zero-downtime guarantee
• Predictable cost management"#,
        title_style: TextStyle::NONE,
        body_style: TextStyle::NONE,
    },
    // Slide 5: System Health Monitoring
    SlideRecord {
        layout: SlideLayout::Content,
        title: "🔍 Proactive System Monitoring",
        body: r#"Real-Time Health Tracking:
• Database Usage - Storage consumption monitoring
• User Limits - Active user tracking  
• Performance Metrics - Response time monitoring
• Error Detection - Automatic issue identification

Automated Alerts:
• Warning at 70% - Plan upgrade timing
• Critical at 90% - Immediate action required
• Visual Indicators - Dashboard health badges
• Email Notifications - Proactive admin alerts

Capacity Planning:
• Growth Predictions - Usage trend analysis
• Upgrade Recommendations - Cost-benefit analysis
• Scaling Strategy - Multi-tier architecture
• Cost Optimization - Right-sized infrastructure"#,
        title_style: TextStyle::NONE,
        body_style: TextStyle::NONE,
    },
    // Slide 6: Multi-Clinic Architecture
    SlideRecord {
        layout: SlideLayout::Content,
        title: "🏢 Scalable Multi-Clinic Support",
        body: r#"Centralized Management:
• Single Dashboard - Manage all clinic locations
• Unified Reporting - Cross-clinic analytics
• Standardized Protocols - Consistent quality care
• Resource Sharing - Optimized staff allocation

Data Isolation:
• Clinic-Specific Data - Secure data separation
• Role-Based Access - Granular permissions
• Compliance Controls - Regulatory adherence
• Audit Trails - Complete activity logging

Scaling Capabilities:
• 1 to 100+ Clinics - Unlimited growth potential
• Geographic Distribution - Multi-region support
• Load Balancing - Optimal performance
• Disaster Recovery - Business continuity"#,
        title_style: TextStyle::NONE,
        body_style: TextStyle::NONE,
    },
    // Slide 7: Pricing & Scaling
    SlideRecord {
        layout: SlideLayout::Content,
        title: "💰 Transparent, Scalable Pricing",
        body: r#"Free Tier (Startup Clinics)
• $0/month - No upfront costs
• 5-10 clinics - Small network support
• 10,000 patients - Substantial capacity
• 50k monthly users - Staff and patient access
• 500MB database - Comprehensive storage

Pro Tier (Growing Networks)  
• $44/month - Predictable costs
• 50+ clinics - Large network support
• 160,000 patients - Enterprise capacity
• 100k monthly users - Unlimited staff access
• 8GB database - Extensive storage

Enterprise (Large Networks)
• Custom pricing - Tailored solutions
• Unlimited clinics - Global deployment
• Unlimited capacity - No restrictions
• Dedicated support - Premium service
• Custom features - Specific requirements"#,
        title_style: TextStyle::NONE,
        body_style: TextStyle::NONE,
    },
    // Slide 8: ROI & Business Benefits
    SlideRecord {
        layout: SlideLayout::Content,
        title: "📈 Measurable Business Impact",
        body: r#"Operational Efficiency:
• 50% reduction in administrative time
• 30% faster patient processing
• 90% elimination of paper records
• 24/7 access to patient data

Quality Improvements:
• 25% increase in treatment success rates
• 60% reduction in medical errors
• 100% compliance with regulations
• Real-time quality monitoring

Financial Benefits:
• 20% revenue increase from efficiency gains
• 40% cost reduction in administrative overhead
• Zero downtime costs from system failures
• Predictable scaling costs

Growth Enablement:
• Unlimited clinic expansion capability
• Standardized operations across locations
• Data-driven decisions for growth
• Competitive advantage in market"#,
        title_style: TextStyle::NONE,
        body_style: TextStyle::NONE,
    },
    // Slide 9: Technology Stack
    SlideRecord {
        layout: SlideLayout::Content,
        title: "💻 Enterprise-Grade Technology",
        body: r#"Frontend Technology:
• React 18 - Modern user interface
• TypeScript - Type-safe development
• Tailwind CSS - Responsive design
• Real-time Updates - Live data synchronization

Backend Infrastructure:
• Supabase - PostgreSQL database
• Real-time APIs - Instant data updates
• Authentication - Secure user management
• File Storage - Document management

Deployment & Hosting:
• Netlify - Global CDN deployment
• Automatic Scaling - Traffic-based scaling
• SSL Security - End-to-end encryption
• 99.9% Uptime - Enterprise reliability"#,
        title_style: TextStyle::NONE,
        body_style: TextStyle::NONE,
    },
    // Slide 10: Security & Compliance
    SlideRecord {
        layout: SlideLayout::Content,
        title: "🔒 Healthcare-Grade Security",
        body: r#"Data Protection:
• HIPAA Compliant - Healthcare data standards
• DPDP Act 2023 - Indian data protection
• End-to-End Encryption - Data security
• Access Controls - Role-based permissions

Regulatory Compliance:
• ART Act 2021 - Indian fertility regulations
• ESHRE Guidelines - European standards
• SART Reporting - US registry compliance
• Audit Trails - Complete activity logging

Business Continuity:
• Automated Backups - Daily data protection
• Disaster Recovery - Business continuity
• Redundant Systems - High availability
• 24/7 Monitoring - Continuous oversight"#,
        title_style: TextStyle::NONE,
        body_style: TextStyle::NONE,
    },
    // Slide 11: Demo & Next Steps
    SlideRecord {
        layout: SlideLayout::Content,
        title: "🚀 Experience Santaan AI EMR",
        body: r#"Live Demo Available:
• URL: santaanaimr.netlify.app
• Demo Credentials: admin@democlinic.com / demo123456
• Full Feature Access - Complete system exploration
• Sample Data - Realistic clinic scenarios

What You Can Explore:
✅ Patient Management - Complete EMR functionality
✅ Treatment Tracking - IVF workflow management
✅ AI Recommendations - Intelligent suggestions
✅ Multi-Clinic Setup - Scalability demonstration
✅ Health Monitoring - System status dashboard
✅ Analytics & Reporting - Business intelligence

Next Steps:
1. Explore Demo - Test all features
2. Schedule Consultation - Discuss requirements
3. Pilot Program - Trial implementation
4. Full Deployment - Production rollout"#,
        title_style: TextStyle::NONE,
        body_style: TextStyle::NONE,
    },
    // Slide 12: Thank You
    SlideRecord {
        layout: SlideLayout::Title,
        title: "Transform Healthcare with Santaan AI EMR",
        body: r#"Your Complete IVF Management Solution
From Single Clinic to Global Network

✅ Comprehensive EMR System
✅ AI-Powered Intelligence  
✅ Proactive Health Monitoring
✅ Unlimited Scalability
✅ Healthcare Compliance

Start Free → Scale Predictably → Grow Unlimited

Demo Now: santaanaimr.netlify.app
Login: admin@democlinic.com / demo123456"#,
        title_style: CLOSING_TITLE,
        body_style: CLOSING_SUBTITLE,
    },
];
