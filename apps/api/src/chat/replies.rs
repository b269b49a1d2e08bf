//! Reply builders, one per intent. Roadmap commands mutate the session in place.

use tracing::info;

use crate::analysis::requirements::missing_skills;
use crate::chat::commands::{parse_add_skill, parse_focus_skill, parse_new_goal};
use crate::chat::history::Topic;
use crate::chat::intents::{follow_up_thread, Turn};
use crate::chat::resume_lookup::{
    candidate_name, education_excerpt, experience_excerpt, opening_line, resume_summary as summarize,
};
use crate::chat::variation::pick;
use crate::lexicon::{ADDED_WEEK_RESOURCES, EXTENDED_WEEK_RESOURCES};
use crate::roadmap::{generate_roadmap, WeekPlan};

/// Weeks appended by one extend command.
pub const EXTEND_WEEKS: usize = 2;
/// Resources listed per week when showing the roadmap.
const SHOWN_RESOURCES: usize = 2;

const NO_RESUME: &str = "I don't have your resume loaded yet. Please upload your resume first!";

pub(crate) fn greeting(turn: &mut Turn<'_>) -> String {
    let role = turn.target_role();
    let mut welcome = format!(
        "Hey there! 👋 Great to see you! I'm here to help with your journey toward {role}. What's on your mind today?"
    );
    if turn.resume_attached {
        welcome.push_str(" I see you've uploaded your resume, so I have good context about your background!");
    }
    pick(
        vec![
            welcome,
            format!("Hello! Ready to work on your career goals? I remember you're interested in {role}. How can I help you today?"),
            format!("Hi! 🌟 Good to have you back! Let's continue working on your {role} career path. What would you like to discuss?"),
        ],
        turn.variation,
    )
}

pub(crate) fn thanks(turn: &mut Turn<'_>) -> String {
    let role = turn.target_role();
    pick(
        vec![
            format!("You're welcome! 😊 I'm glad I could help. Feel free to ask me anything else about your {role} journey!"),
            "Happy to help! Remember, consistent effort is key. What else would you like to explore?".to_string(),
            "Anytime! Your dedication to career growth is inspiring. Let me know if you have more questions!".to_string(),
        ],
        turn.variation,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Résumé content
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn resume_identity(turn: &mut Turn<'_>) -> String {
    let resume = &turn.session.resume_text;
    if resume.is_empty() {
        return "I don't have your resume loaded yet. Please upload your resume first so I can provide personalized advice!"
            .to_string();
    }
    match candidate_name(resume) {
        Some(name) => format!(
            "Based on your resume, your name is **{name}**. Is there anything specific about your resume you'd like to discuss?"
        ),
        None => format!(
            "I have your resume loaded, but I couldn't clearly identify your name. The resume starts with:\n\n'{}...'\n\nWould you like me to help with something specific about your resume?",
            opening_line(resume)
        ),
    }
}

pub(crate) fn resume_summary(turn: &mut Turn<'_>) -> String {
    if !turn.session.has_resume() {
        return NO_RESUME.to_string();
    }
    let summary = summarize(&turn.session.resume_text);
    let skills = &turn.session.skills_have;

    let mut reply = String::from("📄 **Your Resume Summary:**\n\n");
    reply.push_str(&format!("• **Length**: ~{} words\n", summary.word_count));
    reply.push_str(&format!("• **Target Role**: {}\n", turn.target_role()));
    if !summary.sections.is_empty() {
        reply.push_str(&format!("• **Sections Found**: {}\n", summary.sections.join(", ")));
    }
    if !skills.is_empty() {
        let shown: Vec<&str> = skills.iter().take(5).map(String::as_str).collect();
        reply.push_str(&format!("• **Skills Identified**: {}\n", shown.join(", ")));
    }
    reply.push_str(&format!(
        "\n**First lines of your resume:**\n'{}'\n'{}'\n\n",
        summary.first_line, summary.second_line
    ));
    reply.push_str("What would you like to discuss about your resume?");
    reply
}

pub(crate) fn experience(turn: &mut Turn<'_>) -> String {
    if !turn.session.has_resume() {
        return NO_RESUME.to_string();
    }
    let role = turn.target_role();
    match experience_excerpt(&turn.session.resume_text) {
        Some(excerpt) => format!(
            "📋 **From your resume - Experience section:**\n\n{excerpt}...\n\nWould you like tips on improving this section for {role}?"
        ),
        None => format!(
            "I couldn't find a clear 'Experience' section in your resume, but I have your full resume loaded. Would you like tips on adding work experience for {role}?"
        ),
    }
}

pub(crate) fn education(turn: &mut Turn<'_>) -> String {
    if !turn.session.has_resume() {
        return NO_RESUME.to_string();
    }
    let role = turn.target_role();
    match education_excerpt(&turn.session.resume_text) {
        Some(excerpt) => format!(
            "🎓 **From your resume - Education section:**\n\n{excerpt}...\n\nWould you like tips on how to present your education for {role}?"
        ),
        None => format!(
            "I couldn't find a clear 'Education' section in your resume. Would you like guidance on what education to include for {role}?"
        ),
    }
}

pub(crate) fn resume_skills(turn: &mut Turn<'_>) -> String {
    let role = turn.target_role();
    let session = &*turn.session;
    if !session.skills_have.is_empty() {
        let need = if session.skills_need.is_empty() {
            "Upload your resume for personalized recommendations!".to_string()
        } else {
            session.skills_need.join(", ")
        };
        format!(
            "🔧 **Skills identified from your resume:**\n\n{}\n\n**Skills you should develop for {role}:**\n{need}\n\nWould you like a roadmap to develop these skills?",
            session.skills_have.join(", ")
        )
    } else if session.has_resume() {
        format!(
            "I have your resume but haven't extracted detailed skills yet. Based on the content, you're targeting {role}. Would you like me to analyze your skills in more detail?"
        )
    } else {
        NO_RESUME.to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Roadmap
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn roadmap_show(turn: &mut Turn<'_>) -> String {
    let role = turn.target_role();
    let roadmap = &turn.session.roadmap;
    if roadmap.is_empty() {
        return format!(
            "You don't have a roadmap yet! Upload your resume first, and I'll create a personalized learning path for {role}. Or tell me what skills you want to learn!"
        );
    }

    let mut reply = format!("📍 **Your Current Learning Roadmap for {role}:**\n\n");
    for (label, plan) in roadmap.weeks() {
        let resources: Vec<&str> = plan
            .resources
            .iter()
            .take(SHOWN_RESOURCES)
            .map(String::as_str)
            .collect();
        reply.push_str(&format!("**{label}:** {}\n", plan.topic));
        reply.push_str(&format!("   📚 Resources: {}\n\n", resources.join(", ")));
    }
    reply.push_str("Would you like to modify any week? Just tell me what you'd like to change!");
    reply
}

pub(crate) fn roadmap_change_menu(_turn: &mut Turn<'_>) -> String {
    "I'd be happy to modify your roadmap! 🔄 Here are options:\n\n\
     1. **Add a topic** - Tell me: 'Add [skill] to my roadmap'\n\
     2. **Focus on specific skill** - Tell me: 'Focus my learning on [skill]'\n\
     3. **Extend duration** - Tell me: 'Extend the roadmap'\n\
     4. **Regenerate completely** - Tell me: 'Create a roadmap for [goal]'\n\n\
     What would you like to do?"
        .to_string()
}

pub(crate) fn roadmap_add(turn: &mut Turn<'_>) -> String {
    let skill = match parse_add_skill(&turn.text) {
        Some(skill) if !turn.session.roadmap.is_empty() => skill,
        _ => {
            return "I can add a skill to your roadmap! What skill would you like to add? For example: 'Add Python to my roadmap'"
                .to_string()
        }
    };

    let session = &mut *turn.session;
    session
        .roadmap
        .push_week(WeekPlan::new(format!("{skill} Fundamentals"), ADDED_WEEK_RESOURCES));
    session.touch();
    let week = session.roadmap.len();
    info!("Roadmap add: '{skill}' as week {week}");

    format!(
        "✅ Done! I've added **{skill}** to your roadmap as Week {week}.\n\nYour roadmap now has {week} weeks. Want to see the updated roadmap? Just say 'show my roadmap'!"
    )
}

pub(crate) fn roadmap_focus(turn: &mut Turn<'_>) -> String {
    let Some(skill) = parse_focus_skill(&turn.text) else {
        return "What skill would you like to focus on? Tell me: 'Focus my learning on [skill name]'".to_string();
    };

    let roadmap = generate_roadmap(&[skill.clone()], turn.target_role());
    let path = roadmap.topic_lines();
    turn.session.roadmap = roadmap;
    turn.session.touch();
    info!("Roadmap focus: regenerated around '{skill}'");

    format!(
        "🎯 Great choice! I've restructured your roadmap to focus on **{skill}**.\n\nYour new 4-week learning path:\n\n{path}\n\nThis intensive focus will help you master it faster! Say 'show my roadmap' for full details."
    )
}

pub(crate) fn roadmap_extend(turn: &mut Turn<'_>) -> String {
    let session = &mut *turn.session;
    if session.roadmap.is_empty() || session.skills_need.is_empty() {
        return "I can extend your roadmap once you have one! Upload your resume first, or tell me what skills you want to learn."
            .to_string();
    }

    let current = session.roadmap.len();
    for i in current..current + EXTEND_WEEKS {
        let skill = &session.skills_need[i % session.skills_need.len()];
        session
            .roadmap
            .push_week(WeekPlan::new(format!("Advanced {skill}"), EXTENDED_WEEK_RESOURCES));
    }
    session.touch();
    let extended = session.roadmap.len();
    info!("Roadmap extend: {current} -> {extended} weeks");

    format!(
        "📅 Extended! Your roadmap now has **{extended} weeks** instead of {current}.\n\nThe new weeks focus on advanced topics in your skill areas. Say 'show my roadmap' to see the full plan!"
    )
}

pub(crate) fn roadmap_create(turn: &mut Turn<'_>) -> String {
    let Some(goal) = parse_new_goal(&turn.text) else {
        return "I'll create a custom roadmap! What's your new career goal? Tell me: 'Create a roadmap for [role/goal]'"
            .to_string();
    };

    let skills = missing_skills(&[], &goal);
    let roadmap = generate_roadmap(&skills, &goal);
    let path = roadmap.topic_lines();
    turn.session.roadmap = roadmap;
    turn.session.roadmap_goal = goal.clone();
    turn.session.touch();
    info!("Roadmap create: new goal '{goal}'");

    format!(
        "🚀 Created a fresh roadmap for **{goal}**!\n\n{path}\n\nThis plan targets the key skills needed for {goal}. Let me know if you want to modify anything!"
    )
}

pub(crate) fn roadmap_tips(turn: &mut Turn<'_>) -> String {
    let Some(first) = turn.session.roadmap.first() else {
        return "Let me create a roadmap for you first! Upload your resume, or tell me what skills you want to learn."
            .to_string();
    };
    format!(
        "💡 **Tips for your roadmap:**\n\n\
         1. **Start with Week 1**: Focus on '{}' before moving on\n\
         2. **Dedicate time**: Block 1-2 hours daily\n\
         3. **Practice actively**: Don't just read - build things!\n\
         4. **Track progress**: Check off completed topics\n\
         5. **Ask questions**: Use this chat for guidance anytime\n\n\
         Which week are you currently on? I can give you specific advice!",
        first.topic
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Conversation
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn more_follow_up(turn: &mut Turn<'_>) -> String {
    let tips = if turn.recently_discussed(Topic::Resume) {
        vec![
            "Here's another resume tip: Use action verbs like 'led', 'developed', 'achieved' to start your bullet points. They make your experience more impactful!",
            "Another thing to consider: Customize your resume summary for each application. A targeted summary shows you understand the role.",
            "Pro tip: Include a 'Key Achievements' section near the top. Recruiters often skim, so front-load your best accomplishments!",
        ]
    } else {
        vec![
            "Here's more interview advice: Practice the 'What's your weakness?' question. Choose a real weakness you're actively improving!",
            "Another interview tip: Send a thank-you email within 24 hours. Reference something specific you discussed - it shows you were engaged.",
            "Remember: Body language matters! Maintain eye contact, sit up straight, and give a firm handshake. Confidence is key!",
        ]
    };
    pick(tips.into_iter().map(String::from).collect(), turn.variation)
}

pub(crate) fn resume_advice(turn: &mut Turn<'_>) -> String {
    let role = turn.target_role();

    if turn.mentions_any(&["improve", "better", "tips"]) {
        let variants = if turn.session.sector.is_healthcare() {
            vec![
                format!("For your {role} resume, here are key improvements:\n\n• **Certifications first**: List your licenses and certifications prominently\n• **Clinical hours**: Include total clinical/patient care hours\n• **Specializations**: Highlight any specialized training or rotations\n• **Soft skills**: Don't forget patient communication and bedside manner"),
                "Let's make your healthcare resume stand out! Focus on:\n\n1. Quantify patient interactions (e.g., 'Managed care for 20+ patients daily')\n2. List specific procedures you're trained in\n3. Include any quality or safety achievements\n4. Mention EHR systems you've used".to_string(),
            ]
        } else {
            vec![
                format!("Let's improve your {role} resume! Here's what I suggest:\n\n• **Quantify everything**: Use numbers to show impact\n• **Keywords matter**: Mirror language from job postings\n• **Clean format**: Use simple fonts and clear sections\n• **Tailor it**: Customize for each application"),
                format!("Great question! For {role}, your resume should:\n\n1. Start with a powerful summary (2-3 lines max)\n2. List achievements, not just duties\n3. Include relevant technical skills\n4. Keep it to 1-2 pages"),
            ]
        };
        return pick(variants, turn.variation);
    }

    let mut reply = format!("I'd love to help with your resume! Based on your goal of becoming a {role}");
    let skills = &turn.session.skills_have;
    if skills.is_empty() {
        reply.push('.');
    } else {
        let shown: Vec<&str> = skills.iter().take(3).map(String::as_str).collect();
        reply.push_str(&format!(", I see you already have skills in {}.", shown.join(", ")));
    }
    reply.push_str(" What specific aspect would you like to work on - format, content, or ATS optimization?");
    reply
}

pub(crate) fn interview(turn: &mut Turn<'_>) -> String {
    let role = turn.target_role();

    if turn.mentions_any(&["tell me about yourself", "introduce"]) {
        return format!(
            "Great question! For 'Tell me about yourself' in a {role} interview:\n\n\
             **Use this formula:**\n\
             1. Present: What you're doing now (1 sentence)\n\
             2. Past: Relevant experience that led here (2 sentences)\n\
             3. Future: Why you want this role (1 sentence)\n\n\
             **Example structure:**\n\
             'I'm currently [your situation]. Over the past [X years], I've [key achievements]. I'm excited about this opportunity because [connection to the role].'\n\n\
             Want me to help you draft yours?"
        );
    }

    if turn.mentions("weakness") {
        return format!(
            "The 'weakness' question is tricky but manageable! Here's my advice:\n\n\
             **DO:**\n\
             • Choose a real but manageable weakness\n\
             • Show you're actively improving\n\
             • Never say 'perfectionism' or 'working too hard'\n\n\
             **Example for {role}:**\n\
             'I used to struggle with [specific skill]. I've addressed this by [specific action]. Now I [improvement shown].'\n\n\
             Would you like to brainstorm a weakness together?"
        );
    }

    pick(
        vec![
            format!("For your {role} interview, let me share some key strategies:\n\n📌 **Research**: Know the company's recent news and values\n📌 **STAR Method**: Structure answers as Situation, Task, Action, Result\n📌 **Questions**: Prepare 3-5 thoughtful questions to ask them\n📌 **Practice**: Do mock interviews out loud\n\nWhich area would you like to dive deeper into?"),
            format!("Interview prep for {role}! Here's your game plan:\n\n1. **Know your story** - Why this role? Why now?\n2. **Prepare examples** - 5-6 stories that showcase your skills\n3. **Technical prep** - Review any role-specific knowledge\n4. **Logistics** - Plan your route, outfit, and materials\n\nWhat's your biggest interview concern right now?"),
        ],
        turn.variation,
    )
}

pub(crate) fn skill_building(turn: &mut Turn<'_>) -> String {
    let role = turn.target_role();
    let needed = &turn.session.skills_need;

    let Some(focus) = needed.first() else {
        return format!(
            "Let's work on your skill development! For {role}, the key areas to focus on are:\n\n\
             • Technical skills specific to the role\n\
             • Soft skills like communication and leadership\n\
             • Industry certifications\n\n\
             Have you uploaded your resume? That would help me give more personalized recommendations!"
        );
    };

    let top: Vec<&str> = needed.iter().take(3).map(String::as_str).collect();
    pick(
        vec![
            format!("Based on your profile, I'd recommend focusing on **{focus}** first. Here's why:\n\n• It's in high demand for {role}\n• It complements your existing skills\n• There are great free resources available\n\nWould you like specific learning resources for {focus}?"),
            format!("For your {role} goals, let's prioritize skill building:\n\n**Skills to develop:** {}\n\nI suggest starting with {focus} - it'll have the biggest impact on your job prospects. Want me to create a learning roadmap?", top.join(", ")),
        ],
        turn.variation,
    )
}

pub(crate) fn career_path(turn: &mut Turn<'_>) -> String {
    let role = turn.target_role();
    pick(
        vec![
            format!("Career growth toward {role} is an exciting journey! Let me share a strategic approach:\n\n**Short-term (0-3 months):**\n• Fill skill gaps through courses\n• Update your resume and LinkedIn\n• Start networking in the field\n\n**Medium-term (3-6 months):**\n• Apply strategically to target roles\n• Build a portfolio of relevant work\n• Seek mentorship\n\nWhat stage are you in right now?"),
            format!("I love helping with career transitions! For your move toward {role}:\n\n🎯 **Assess**: What transferable skills do you already have?\n📚 **Learn**: What gaps need filling?\n🤝 **Connect**: Who can help you get there?\n🚀 **Act**: What's your first concrete step?\n\nShall we work through any of these together?"),
        ],
        turn.variation,
    )
}

pub(crate) fn salary(turn: &mut Turn<'_>) -> String {
    let role = turn.target_role();
    pick(
        vec![
            format!("Salary negotiation is so important! Here's my advice for {role}:\n\n💰 **Research**: Check Glassdoor, LinkedIn Salary, Levels.fyi for market rates\n📊 **Know your worth**: Factor in experience, skills, and location\n🗣️ **Practice**: Rehearse your ask out loud\n⏰ **Timing**: Negotiate after receiving an offer, not before\n\n**Key phrase to use:**\n'Based on my research and experience, I was expecting something in the range of [X-Y].'\n\nWant to discuss your specific situation?"),
            format!("Let's talk compensation! For {role} roles, here's what matters:\n\n1. **Total package**: Consider benefits, bonuses, equity, not just base\n2. **Market data**: Always know the going rate before negotiating\n3. **Confidence**: They made an offer because they want YOU\n4. **Flexibility**: Be willing to negotiate other terms too\n\nDo you have an offer to discuss?"),
        ],
        turn.variation,
    )
}

pub(crate) fn job_search(turn: &mut Turn<'_>) -> String {
    let role = turn.target_role();
    pick(
        vec![
            format!("Job searching for {role} positions? Here's a smart strategy:\n\n**Quality over quantity:**\n• Customize each application\n• Research companies before applying\n• Network your way in when possible\n\n**Where to look:**\n• LinkedIn (set job alerts!)\n• Company career pages\n• Industry-specific job boards\n• Referrals (80% of jobs!)\n\nHow's your current search going?"),
            format!("Let me help optimize your job search for {role}!\n\n📝 **Track applications** in a spreadsheet\n🎯 **Focus on fit** - quality > quantity\n📧 **Follow up** after 1 week if no response\n🤝 **Network actively** - most jobs come through connections\n\nWhat part of the job search is most challenging for you?"),
        ],
        turn.variation,
    )
}

pub(crate) fn networking(turn: &mut Turn<'_>) -> String {
    format!(
        "Networking is crucial for {}! Here's how to do it authentically:\n\n\
         **Online:**\n\
         • Optimize your LinkedIn profile\n\
         • Engage with industry content\n\
         • Send personalized connection requests\n\n\
         **Offline:**\n\
         • Attend industry events and meetups\n\
         • Join professional associations\n\
         • Request informational interviews\n\n\
         **Key tip:** Give before you ask. Share value, then people want to help you!\n\n\
         Would you like specific networking scripts or templates?",
        turn.target_role()
    )
}

pub(crate) fn affirmative_follow_up(turn: &mut Turn<'_>) -> String {
    match follow_up_thread(turn) {
        Some(Topic::Resume) => "Perfect! Let's work on your resume. First, what's your current biggest challenge - is it the format, content, or getting past ATS systems?".to_string(),
        Some(Topic::Interview) => "Great! Let's prepare you for interviews. Would you like to practice some common questions, or work on your 'tell me about yourself' story?".to_string(),
        Some(_) => "Awesome! I'll help you build a learning plan. What's your preferred learning style - video courses, hands-on projects, or reading documentation?".to_string(),
        None => fallback(turn),
    }
}

pub(crate) fn fallback(turn: &mut Turn<'_>) -> String {
    let role = turn.target_role();
    pick(
        vec![
            format!("I'm here to help with your {role} career journey! 🌟 I can assist with:\n\n• Resume/CV optimization\n• Interview preparation\n• Skill development plans\n• Job search strategies\n• Salary negotiation\n• Career transitions\n\nWhat would you like to explore?"),
            format!("Great question! While I think about the best way to help you with that, here are the main areas I can assist with for your {role} path:\n\n1. 📄 Resume & ATS\n2. 🎤 Interview Prep\n3. 📚 Skill Building\n4. 💼 Job Search\n5. 💰 Salary Tips\n\nWhich area interests you most?"),
            format!("I'd love to help you succeed as a {role}! Could you tell me a bit more about what you're working on? For example:\n\n• Are you updating your resume?\n• Preparing for interviews?\n• Learning new skills?\n• Exploring career options?\n\nThe more context you share, the better I can assist!"),
        ],
        turn.variation,
    )
}
