use super::{preamble, AgentDefinition};
use crate::prompts::EDUCATOR;
use crate::stage::Prompt;
use crate::stages::{FinalizeStage, Flag, PromptStage, ResultCompiler};
use eduflow_core::Capabilities;

const VISUAL_ANALYSIS: &str = "\
Analyze visual learning needs:
Content: {prompt}
Grades: {grades}

Visual Analysis:
1. Identify concepts that benefit from visualization
2. Determine appropriate visual representation types
3. Consider age-appropriate visual complexity
4. Assess cognitive load of visual elements
5. Plan visual hierarchy and organization
6. Consider accessibility and inclusivity

Provide visual design recommendations.";

const VISUAL_STRUCTURE: &str = "\
Design visual structure and layout:
Visual Analysis: {visual_analysis}
Content: {prompt}

Structure Design:
1. Create overall visual organization
2. Design information hierarchy
3. Plan visual flow and relationships
4. Determine color coding and visual cues
5. Design layout for different screen sizes
6. Plan interactive elements

Create detailed visual structure plan.";

const VISUAL_CONTENT: &str = "\
Create detailed visual content specifications:
Visual Structure: {visual_structure}
Topic: {prompt}
Grades: {grades}

Visual Content Creation:
1. Detailed diagram specifications
2. SVG code for simple graphics
3. Color schemes and styling
4. Typography and text placement
5. Icon and symbol recommendations
6. Animation and interaction suggestions

Create comprehensive visual content specifications.";

const GRADE_OPTIMIZATION: &str = "\
Optimize visuals for grade levels:
Visual Content: {visual_content}
Target Grades: {grades}

Grade Optimization:
1. Adjust visual complexity for each grade
2. Modify color schemes for age appropriateness
3. Adapt text size and readability
4. Simplify or elaborate based on grade level
5. Include grade-specific examples in visuals
6. Create implementation guidelines for teachers

Compile final visual aids package.";

const VISUAL_PACKAGE: &str = "\
VISUAL AIDS DESIGN PACKAGE

Topic: {prompt}
Target Grades: {grades}

VISUAL ANALYSIS AND RECOMMENDATIONS:
{visual_analysis}

VISUAL STRUCTURE AND LAYOUT:
{visual_structure}

DETAILED VISUAL SPECIFICATIONS:
{visual_content}

GRADE-LEVEL OPTIMIZATIONS:
{response}

IMPLEMENTATION GUIDE:
- Use high contrast colors for better visibility
- Ensure text is readable at various sizes
- Consider cultural sensitivity in image choices
- Provide alternative text for accessibility
- Test with target age groups for effectiveness";

pub fn visual_aids() -> AgentDefinition {
    let workflow = preamble("visual-aids")
        .stage(PromptStage::new(
            "visual_needs_analysis",
            "visual_analysis",
            Prompt::new(
                "You are an expert in visual learning design and educational graphics.",
                VISUAL_ANALYSIS,
            ),
            "Visual learning needs analyzed",
        ))
        .stage(PromptStage::new(
            "visual_structure_design",
            "visual_structure",
            Prompt::new(
                "You are an expert visual designer specializing in educational materials layout and structure.",
                VISUAL_STRUCTURE,
            ),
            "Visual structure and layout designed",
        ))
        .stage(PromptStage::new(
            "visual_content_creation",
            "visual_content",
            Prompt::new(
                "You are an expert in creating educational visual content and diagram specifications.",
                VISUAL_CONTENT,
            ),
            "Visual content specifications created",
        ))
        .stage(
            ResultCompiler::new(
                "grade_optimization",
                VISUAL_PACKAGE,
                "Visual aids optimized for all grade levels",
            )
            .closing(Prompt::new(
                "You are an expert in age-appropriate visual design for educational materials.",
                GRADE_OPTIMIZATION,
            ))
            .flag("visual_type", Flag::text("comprehensive_educational_visual_aids"))
            .flag("grades_optimized", Flag::Grades)
            .flag("includes_svg", Flag::yes())
            .flag("accessibility_considered", Flag::yes())
            .flag("implementation_ready", Flag::yes()),
        )
        .stage(FinalizeStage);

    AgentDefinition {
        id: "visual-aids",
        name: "Visual Aids Designer",
        capabilities: Capabilities::new(
            "Create visual learning aids and diagrams",
            &[
                "Conceptual diagram design",
                "Flowchart creation",
                "Mind map generation",
                "Infographic layouts",
                "Visual organizer templates",
                "Chart and graph designs",
                "Interactive visual elements",
            ],
            &["diagram_descriptions", "visual_templates", "svg_code", "layout_guides"],
            &["concept_mapping", "visual_learning", "diagram_design"],
        ),
        workflow,
    }
}

const GAMIFICATION_ANALYSIS: &str = "\
Analyze gamification needs:
Educational Content: {prompt}
Target Grades: {grades}

Gamification Analysis:
1. Identify learning objectives suitable for gamification
2. Assess student motivation factors for these grades
3. Determine appropriate game mechanics
4. Consider cultural preferences and sensitivities
5. Evaluate technology requirements
6. Plan engagement sustainability strategies

Provide gamification strategy recommendations.";

const GAME_MECHANICS: &str = "\
Design game mechanics:
Gamification Analysis: {gamification_analysis}
Educational Content: {prompt}
Target Grades: {grades}

Game Mechanics Design:
1. Core gameplay loop
2. Progress tracking systems
3. Point and scoring mechanisms
4. Level progression structures
5. Collaboration vs competition balance
6. Feedback and recognition systems

Create detailed game mechanics specifications.";

const CHALLENGES: &str = "\
Create educational challenges:
Game Mechanics: {game_mechanics}
Educational Content: {prompt}
Grades: {grades}

Challenge Creation:
1. Design specific learning challenges
2. Create progressive difficulty levels
3. Include collaborative challenges
4. Design individual skill challenges
5. Create creative expression challenges
6. Include real-world application challenges

Create comprehensive challenge system.";

const REWARDS: &str = "\
Design reward and recognition system:
Game Mechanics: {game_mechanics}
Challenges: {challenges}
Target Grades: {grades}

Reward System Design:
1. Badge and achievement system
2. Progress visualization methods
3. Leaderboard and ranking systems
4. Virtual currency or tokens
5. Unlockable content and features
6. Recognition ceremonies and celebrations

Compile complete gamified learning system.";

const GAME_SYSTEM: &str = "\
GAMIFIED TEACHING SYSTEM

Educational Topic: {prompt}
Target Grades: {grades}
Languages: {languages}

GAMIFICATION STRATEGY:
{gamification_analysis}

CORE GAME MECHANICS:
{game_mechanics}

EDUCATIONAL CHALLENGES:
{challenges}

REWARD AND RECOGNITION SYSTEM:
{response}

IMPLEMENTATION GUIDELINES:
1. Start with simple mechanics and gradually add complexity
2. Ensure educational objectives remain primary focus
3. Monitor engagement levels and adjust accordingly
4. Provide both individual and collaborative opportunities
5. Celebrate diverse types of achievements
6. Maintain cultural sensitivity in all game elements

ASSESSMENT INTEGRATION:
- Use game performance as formative assessment
- Track learning progress through game analytics
- Provide detailed feedback through game interactions
- Create portfolios of game-based achievements";

pub fn gamified_teaching() -> AgentDefinition {
    let workflow = preamble("gamified-teaching")
        .stage(PromptStage::new(
            "gamification_analysis",
            "gamification_analysis",
            Prompt::new(
                "You are an expert in educational gamification and student engagement strategies.",
                GAMIFICATION_ANALYSIS,
            ),
            "Gamification needs and opportunities analyzed",
        ))
        .stage(PromptStage::new(
            "game_mechanics_design",
            "game_mechanics",
            Prompt::new(
                "You are an expert game designer specializing in educational game mechanics.",
                GAME_MECHANICS,
            ),
            "Core game mechanics designed",
        ))
        .stage(PromptStage::new(
            "challenge_creation",
            "challenges",
            Prompt::new(EDUCATOR, CHALLENGES),
            "Educational challenges and activities created",
        ))
        .stage(
            ResultCompiler::new(
                "reward_system_design",
                GAME_SYSTEM,
                "Complete gamified teaching system created",
            )
            .closing(Prompt::new(
                "You are an expert in educational reward systems and student motivation.",
                REWARDS,
            ))
            .flag("system_type", Flag::text("comprehensive_gamified_learning_system"))
            .flag("grades_covered", Flag::Grades)
            .flag("includes_badges", Flag::yes())
            .flag("includes_challenges", Flag::yes())
            .flag("includes_rewards", Flag::yes())
            .flag("culturally_appropriate", Flag::yes()),
        )
        .stage(FinalizeStage);

    AgentDefinition {
        id: "gamified-teaching",
        name: "Gamified Teaching Designer",
        capabilities: Capabilities::new(
            "Create gamified educational experiences",
            &[
                "Educational game design",
                "Badge and achievement systems",
                "Interactive challenges",
                "Progress tracking mechanics",
                "Leaderboard systems",
                "Quest-based learning",
                "Reward mechanisms",
            ],
            &["game_specifications", "challenge_designs", "reward_systems", "engagement_mechanics"],
            &["game_mechanics", "motivation_systems", "interactive_learning"],
        ),
        workflow,
    }
}

const AR_POTENTIAL: &str = "\
Assess AR learning potential:
Educational Content: {prompt}
Grade Levels: {grades}
Languages: {languages}

AR Potential Assessment:
1. Identify concepts benefiting from 3D visualization
2. Evaluate spatial learning opportunities
3. Assess interactive manipulation potential
4. Consider abstract concept concretization
5. Evaluate engagement and motivation factors
6. Consider technical feasibility and accessibility

Provide comprehensive AR potential analysis.";

const AR_EXPERIENCE: &str = "\
Design AR learning experience:
AR Assessment: {ar_potential_assessment}
Educational Content: {prompt}
Target Grades: {grades}

AR Experience Design:
1. Overall AR learning journey design
2. Scene composition and spatial layout
3. User interaction flow and progression
4. Learning objective integration
5. Multi-sensory engagement strategies
6. Collaborative AR learning opportunities

Create comprehensive AR experience design.";

const MODEL_SPECIFICATIONS: &str = "\
Specify 3D models and assets:
AR Experience Design: {ar_experience_design}
Educational Content: {prompt}

3D Model Specifications:
1. Detailed 3D model requirements
2. Texture and material specifications
3. Animation and movement requirements
4. Scale and proportion guidelines
5. Level-of-detail considerations
6. Cultural and educational accuracy requirements

Create comprehensive 3D asset specifications.";

const INTERACTION_DESIGN: &str = "\
Create interaction design:
AR Experience: {ar_experience_design}
3D Models: {model_specifications}
Target Grades: {grades}

Interaction Design:
1. Touch and gesture interaction patterns
2. Voice command integration
3. Multi-user collaboration features
4. Progressive difficulty mechanics
5. Assessment and feedback integration
6. Accessibility and accommodation features

Design comprehensive interaction system.";

const IMPLEMENTATION: &str = "\
Plan AR implementation strategy:
Complete AR Design: {ar_experience_design}
Interaction Design: {interaction_design}
Target Grades: {grades}

Implementation Planning:
1. Platform and device requirements
2. Development timeline and phases
3. Testing and quality assurance plan
4. Teacher training requirements
5. Student onboarding strategies
6. Maintenance and update procedures

Compile comprehensive AR learning system.";

const AR_SYSTEM: &str = "\
AUGMENTED REALITY LEARNING SYSTEM

Educational Focus: {prompt}
Target Grades: {grades}
Languages Supported: {languages}

AR LEARNING POTENTIAL ANALYSIS:
{ar_potential_assessment}

COMPREHENSIVE AR EXPERIENCE DESIGN:
{ar_experience_design}

3D MODELS AND ASSETS SPECIFICATIONS:
{model_specifications}

USER INTERACTION DESIGN:
{interaction_design}

IMPLEMENTATION STRATEGY:
{response}

EDUCATIONAL INTEGRATION GUIDELINES:
1. Align AR experiences with curriculum objectives
2. Provide pre-AR preparation activities
3. Include post-AR reflection and assessment
4. Support diverse learning styles and abilities
5. Ensure cultural sensitivity and inclusivity
6. Monitor student engagement and learning outcomes

ACCESSIBILITY CONSIDERATIONS:
- Support for students with visual impairments
- Alternative interaction methods for motor limitations
- Audio descriptions and haptic feedback options
- Adjustable difficulty and complexity levels
- Multi-language support and cultural adaptations";

pub fn ar_integration() -> AgentDefinition {
    let workflow = preamble("ar-integration")
        .stage(PromptStage::new(
            "ar_potential_assessment",
            "ar_potential_assessment",
            Prompt::new(
                "You are an expert in educational AR technology and spatial learning design.",
                AR_POTENTIAL,
            ),
            "AR learning potential assessed",
        ))
        .stage(PromptStage::new(
            "ar_experience_design",
            "ar_experience_design",
            Prompt::new(
                "You are an expert AR experience designer specializing in educational applications.",
                AR_EXPERIENCE,
            ),
            "AR learning experience designed",
        ))
        .stage(PromptStage::new(
            "3d_model_specification",
            "model_specifications",
            Prompt::new(EDUCATOR, MODEL_SPECIFICATIONS),
            "3D models and assets specified",
        ))
        .stage(PromptStage::new(
            "interaction_design_creation",
            "interaction_design",
            Prompt::new(
                "You are an expert in user interaction design for educational AR applications.",
                INTERACTION_DESIGN,
            ),
            "User interaction design created",
        ))
        .stage(
            ResultCompiler::new(
                "implementation_planning",
                AR_SYSTEM,
                "Complete AR learning system with implementation plan created",
            )
            .closing(Prompt::new(
                "You are an expert in educational technology implementation and project management.",
                IMPLEMENTATION,
            ))
            .flag("system_type", Flag::text("comprehensive_ar_learning_system"))
            .flag("grades_supported", Flag::Grades)
            .flag("includes_3d_models", Flag::yes())
            .flag("includes_interactions", Flag::yes())
            .flag("implementation_ready", Flag::yes())
            .flag("accessibility_considered", Flag::yes()),
        )
        .stage(FinalizeStage);

    AgentDefinition {
        id: "ar-integration",
        name: "AR Integration & 3D Learning",
        capabilities: Capabilities::new(
            "Create augmented reality learning experiences",
            &[
                "3D model integration planning",
                "AR scene design specifications",
                "Interactive 3D learning environments",
                "Virtual object manipulation guides",
                "Spatial learning experience design",
                "Multi-platform AR compatibility",
            ],
            &["ar_specifications", "3d_model_requirements", "interaction_guides", "implementation_plans"],
            &["ar_design", "3d_education", "spatial_learning"],
        ),
        workflow,
    }
}
